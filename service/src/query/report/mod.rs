//! [`Query`] collection of reports.

pub mod financial_summary;

pub use self::financial_summary::FinancialSummary;
