//!
//! The performance analyzer library.
//!

pub mod analysis;
pub mod input;
pub mod model;
pub mod output;
pub mod util;


pub use crate::analysis::detect_regressions;
pub use crate::analysis::Analyzer;
pub use crate::input::load_results;
pub use crate::input::resolve_paths;
pub use crate::input::LoadError;
pub use crate::model::regression::RegressionResult;
pub use crate::model::report::AnalysisReport;
pub use crate::model::report::CrossPlatformAnalysis;
pub use crate::model::report::MemoryAnalysis;
pub use crate::model::report::Summary;
pub use crate::model::result::PerformanceResult;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::markdown::Markdown as MarkdownOutput;
