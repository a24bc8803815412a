//! [`Command`] definition.

pub mod create_contract;
pub mod create_employee;
pub mod create_monthly_record;
pub mod create_supplier;
pub mod create_transaction;
pub mod delete_contract;
pub mod delete_dismissal;
pub mod delete_employee;
pub mod delete_monthly_record;
pub mod delete_supplier;
pub mod delete_transaction;
pub mod dismiss_employee;
pub mod register_vacation;
pub mod update_contract;
pub mod update_dismissal;
pub mod update_employee;
pub mod update_monthly_record;
pub mod update_supplier;
pub mod update_transaction;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_contract::CreateContract, create_employee::CreateEmployee,
    create_monthly_record::CreateMonthlyRecord,
    create_supplier::CreateSupplier, create_transaction::CreateTransaction,
    delete_contract::DeleteContract, delete_dismissal::DeleteDismissal,
    delete_employee::DeleteEmployee,
    delete_monthly_record::DeleteMonthlyRecord,
    delete_supplier::DeleteSupplier, delete_transaction::DeleteTransaction,
    dismiss_employee::DismissEmployee, register_vacation::RegisterVacation,
    update_contract::UpdateContract, update_dismissal::UpdateDismissal,
    update_employee::UpdateEmployee,
    update_monthly_record::UpdateMonthlyRecord,
    update_supplier::UpdateSupplier, update_transaction::UpdateTransaction,
};
