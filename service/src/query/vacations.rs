//! [`Query`] collection related to the multiple [`Vacation`]s.

use std::ops::RangeInclusive;

use common::operations::By;

use crate::{domain::employee::vacation, read};
#[cfg(doc)]
use crate::{domain::Vacation, Query};

use super::DatabaseQuery;

/// Queries a list of all [`Vacation`]s with the vacationing employees' names,
/// newest first.
pub type List = DatabaseQuery<By<Vec<read::vacation::Named>, ()>>;

/// Queries [`Vacation`]s starting within the given day range, with the
/// vacationing employees' names.
pub type Within = DatabaseQuery<
    By<Vec<read::vacation::Named>, RangeInclusive<vacation::StartDate>>,
>;
