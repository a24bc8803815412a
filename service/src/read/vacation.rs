//! [`Vacation`] read model definition.

use crate::domain::{employee, Vacation};
#[cfg(doc)]
use crate::domain::Employee;

/// [`Vacation`] joined with the [`Name`] of the vacationing [`Employee`].
///
/// [`Name`]: employee::Name
#[derive(Clone, Debug)]
pub struct Named {
    /// The [`Vacation`] itself.
    pub vacation: Vacation,

    /// [`Name`] of the vacationing [`Employee`].
    ///
    /// [`Name`]: employee::Name
    pub employee_name: employee::Name,
}
