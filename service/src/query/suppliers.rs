//! [`Query`] collection related to the multiple [`Supplier`]s.

use std::ops::RangeInclusive;

use common::operations::By;

use crate::domain::{supplier, Supplier};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of all [`Supplier`]s, newest first.
pub type List = DatabaseQuery<By<Vec<Supplier>, ()>>;

/// Queries [`Supplier`]s paid within the given day range.
///
/// [`Supplier`]s without a payment day recorded are never matched.
pub type PaidWithin = DatabaseQuery<
    By<Vec<Supplier>, RangeInclusive<supplier::PaymentDate>>,
>;
