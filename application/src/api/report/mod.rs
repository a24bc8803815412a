//! GraphQL report definitions.

pub mod dashboard;

pub use self::dashboard::Dashboard;
