//! [`Query`] collection related to a single [`Employee`].

use common::operations::By;

use crate::domain::{employee, Employee};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Employee`] by their [`employee::Id`].
pub type ById = DatabaseQuery<By<Option<Employee>, employee::Id>>;
