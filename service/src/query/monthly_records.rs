//! [`Query`] collection related to the multiple [`MonthlyRecord`]s.

use std::ops::RangeInclusive;

use common::operations::By;

use crate::domain::{contract, monthly_record, MonthlyRecord};
#[cfg(doc)]
use crate::{domain::Contract, Query};

use super::DatabaseQuery;

/// Queries all [`MonthlyRecord`]s of the given [`Contract`], newest
/// [`Period`] first.
///
/// [`Period`]: monthly_record::Period
pub type OfContract = DatabaseQuery<By<Vec<MonthlyRecord>, contract::Id>>;

/// Queries [`MonthlyRecord`]s of the given [`Contract`] created within the
/// given timestamp range.
pub type CreatedWithin = DatabaseQuery<
    By<
        Vec<MonthlyRecord>,
        (contract::Id, RangeInclusive<monthly_record::CreationDateTime>),
    >,
>;
