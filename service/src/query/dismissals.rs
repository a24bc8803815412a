//! [`Query`] collection related to the multiple [`Dismissal`]s.

use std::ops::RangeInclusive;

use common::operations::By;

use crate::{domain::employee::dismissal, read};
#[cfg(doc)]
use crate::{domain::Dismissal, Query};

use super::DatabaseQuery;

/// Queries a list of all [`Dismissal`]s with the dismissed employees' names,
/// newest first.
pub type List = DatabaseQuery<By<Vec<read::dismissal::Named>, ()>>;

/// Queries [`Dismissal`]s registered within the given day range, with the
/// dismissed employees' names.
pub type Within = DatabaseQuery<
    By<Vec<read::dismissal::Named>, RangeInclusive<dismissal::DismissalDate>>,
>;
