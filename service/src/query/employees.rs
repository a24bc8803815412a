//! [`Query`] collection related to the multiple [`Employee`]s.

use common::operations::By;

use crate::domain::{contract, Employee};
#[cfg(doc)]
use crate::{domain::Contract, Query};

use super::DatabaseQuery;

/// Queries a list of all [`Employee`]s, newest first.
pub type List = DatabaseQuery<By<Vec<Employee>, ()>>;

/// Queries active [`Employee`]s linked to the given [`Contract`].
pub type ActiveOfContract = DatabaseQuery<By<Vec<Employee>, contract::Id>>;
