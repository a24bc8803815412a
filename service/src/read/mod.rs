//! Read entities definitions.

pub mod dismissal;
pub mod vacation;
