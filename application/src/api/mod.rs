//! GraphQL API definitions.

pub mod contract;
pub mod employee;
pub mod monthly_record;
mod mutation;
mod query;
pub mod report;
pub mod scalar;
pub mod supplier;
pub mod transaction;

use crate::Context;

pub use self::{
    contract::Contract, employee::Employee, monthly_record::MonthlyRecord,
    mutation::Mutation, query::Query, supplier::Supplier,
    transaction::Transaction,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<Context>,
>;
