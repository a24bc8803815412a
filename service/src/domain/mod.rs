//! Domain definitions.

pub mod contract;
pub mod employee;
pub mod monthly_record;
pub mod supplier;
pub mod transaction;

pub use self::{
    contract::Contract,
    employee::{Dismissal, Employee, Vacation},
    monthly_record::MonthlyRecord,
    supplier::Supplier,
    transaction::Transaction,
};
