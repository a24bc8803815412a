//! [`Dismissal`] read model definition.

use crate::domain::{contract, employee, Dismissal};
#[cfg(doc)]
use crate::domain::{Contract, Employee};

/// [`Dismissal`] joined with the [`Name`] of the dismissed [`Employee`] and
/// the municipality of the [`Contract`] they worked, if any.
///
/// [`Name`]: employee::Name
#[derive(Clone, Debug)]
pub struct Named {
    /// The [`Dismissal`] itself.
    pub dismissal: Dismissal,

    /// [`Name`] of the dismissed [`Employee`].
    ///
    /// [`Name`]: employee::Name
    pub employee_name: employee::Name,

    /// Municipality of the [`Contract`] the [`Employee`] worked.
    ///
    /// [`None`] for headquarters staff.
    pub contract_municipality: Option<contract::MunicipalityName>,
}
