//!
//! The performance analysis data model.
//!

pub mod regression;
pub mod report;
pub mod result;
