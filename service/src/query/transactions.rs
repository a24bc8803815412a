//! [`Query`] collection related to the multiple [`Transaction`]s.

use std::ops::RangeInclusive;

use common::operations::By;

use crate::domain::{transaction, Transaction};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of all [`Transaction`]s, newest first.
pub type List = DatabaseQuery<By<Vec<Transaction>, ()>>;

/// Queries [`Transaction`]s falling due within the given day range.
pub type DueWithin = DatabaseQuery<
    By<Vec<Transaction>, RangeInclusive<transaction::DueDate>>,
>;
