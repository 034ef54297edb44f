//!
//! The JSON serialization of the analysis report.
//!

use std::path::Path;

use crate::model::report::AnalysisReport;

///
/// The JSON serialization of the analysis report.
///
/// Reproduces every report field losslessly, numbers as numbers.
///
#[derive(Debug)]
pub struct Json {
    /// The serialized contents.
    pub content: String,
}

impl TryFrom<&AnalysisReport> for Json {
    type Error = anyhow::Error;

    fn try_from(report: &AnalysisReport) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(report)
            .map_err(|error| anyhow::anyhow!("Analysis report JSON serialization: {error}"))?;
        Ok(Self { content })
    }
}

impl Json {
    ///
    /// Writes the serialized report to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Analysis file {path:?} writing: {error}"))
    }
}
