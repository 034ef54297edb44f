//!
//! The performance analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Current benchmark result files, or directories with JSON files.
    #[arg(long = "current", required = true, num_args = 1..)]
    pub current: Vec<PathBuf>,

    /// Baseline benchmark result file.
    #[arg(long = "baseline")]
    pub baseline: Option<PathBuf>,

    /// Regression threshold as a fraction of the baseline time.
    #[arg(long = "threshold", default_value_t = 0.05)]
    pub threshold: f64,

    /// Output analysis file (JSON).
    #[arg(long = "output")]
    pub output: PathBuf,

    /// Output report file (Markdown).
    #[arg(long = "report")]
    pub report: Option<PathBuf>,

    /// Do not exit with a non-zero code when regressions are detected.
    #[arg(long = "no-fail-on-regression")]
    pub no_fail_on_regression: bool,
}
