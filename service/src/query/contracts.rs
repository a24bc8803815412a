//! [`Query`] collection related to the multiple [`Contract`]s.

use common::operations::By;

use crate::domain::Contract;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of all [`Contract`]s, newest first.
pub type List = DatabaseQuery<By<Vec<Contract>, ()>>;
