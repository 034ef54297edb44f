//!
//! Analysis report output.
//!

pub mod json;
pub mod markdown;
