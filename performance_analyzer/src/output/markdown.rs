//!
//! The Markdown rendering of the analysis report.
//!

use std::path::Path;

use crate::model::regression::RegressionResult;
use crate::model::report::AnalysisReport;
use crate::util;

/// The number of rows in the regression and improvement tables.
pub const TABLE_ROWS_LIMIT: usize = 10;

///
/// The Markdown rendering of the analysis report.
///
/// Sections are rendered in a fixed order: executive summary, regressions,
/// improvements, memory analysis, insights, recommendations, technical
/// details. The regression and improvement tables are omitted when their
/// lists are empty.
///
#[derive(Debug)]
pub struct Markdown {
    /// The rendered contents.
    pub content: String,
}

impl From<&AnalysisReport> for Markdown {
    fn from(report: &AnalysisReport) -> Self {
        let mut content = String::with_capacity(16384);

        content.push_str("# ECScope Performance Analysis Report\n\n");
        content.push_str(format!("Generated: {}\n\n", report.timestamp).as_str());

        content.push_str("## Executive Summary\n\n");
        content.push_str(
            format!(
                "- **Total Tests Analyzed**: {}\n",
                report.summary.total_tests
            )
            .as_str(),
        );
        content.push_str(
            format!("- **Test Categories**: {}\n", report.summary.test_categories).as_str(),
        );
        content.push_str(
            format!(
                "- **Architectures Tested**: {}\n",
                report.summary.architectures_tested
            )
            .as_str(),
        );
        content.push_str(
            format!(
                "- **Performance Regressions**: {}\n",
                report.summary.regressions_detected
            )
            .as_str(),
        );
        content.push_str(
            format!(
                "- **Performance Improvements**: {}\n",
                report.summary.improvements_detected
            )
            .as_str(),
        );
        content.push_str(
            format!(
                "- **Average Performance**: {:.2} μs\n\n",
                report.summary.average_performance_us
            )
            .as_str(),
        );

        if !report.regressions.is_empty() {
            content.push_str("## Performance Regressions\n\n");
            push_comparison_table(&mut content, report.regressions.as_slice(), "+");
        }

        if !report.improvements.is_empty() {
            content.push_str("## Performance Improvements\n\n");
            push_comparison_table(&mut content, report.improvements.as_slice(), "");
        }

        content.push_str("## Memory Analysis\n\n");
        let memory = &report.memory_analysis;
        if memory.tests_with_memory_data > 0 {
            if let (Some(average), Some(peak)) =
                (memory.average_memory_usage, memory.max_memory_usage)
            {
                content.push_str(
                    format!(
                        "- **Average Memory Usage**: {} bytes\n",
                        util::group_digits(average.round() as u64)
                    )
                    .as_str(),
                );
                content.push_str(
                    format!(
                        "- **Peak Memory Usage**: {} bytes\n",
                        util::group_digits(peak)
                    )
                    .as_str(),
                );
            }
            if let Some(per_entity) = memory.average_memory_per_entity {
                content.push_str(format!("- **Memory per Entity**: {per_entity:.2} bytes\n").as_str());
            }
            if let Some(cache_ratio) = memory.average_cache_hit_ratio {
                content.push_str(
                    format!("- **Cache Hit Ratio**: {:.1}%\n", cache_ratio * 100.0).as_str(),
                );
            }
            content.push('\n');
        }

        content.push_str("## Educational Insights\n\n");
        for (index, insight) in report.educational_insights.iter().enumerate() {
            content.push_str(format!("{}. {insight}\n\n", index + 1).as_str());
        }

        content.push_str("## Optimization Recommendations\n\n");
        for (index, recommendation) in report.optimization_recommendations.iter().enumerate() {
            content.push_str(format!("{}. {recommendation}\n\n", index + 1).as_str());
        }

        content.push_str("## Technical Details\n\n");
        if !report.summary.entity_counts_tested.is_empty() {
            let entity_counts = report
                .summary
                .entity_counts_tested
                .iter()
                .map(|count| count.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            content.push_str(format!("- **Entity Counts Tested**: {entity_counts}\n").as_str());
        }
        content.push_str(
            format!(
                "- **Performance Variance**: {:.2} μs\n",
                report.summary.performance_variance
            )
            .as_str(),
        );
        if !report.cross_platform_analysis.platforms_tested.is_empty() {
            let platforms = report.cross_platform_analysis.platforms_tested.join(", ");
            content.push_str(format!("- **Platforms**: {platforms}\n").as_str());
        }

        Self { content }
    }
}

impl Markdown {
    ///
    /// Writes the rendered report to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))
    }
}

///
/// Renders a GitHub-flavored comparison table, up to [`TABLE_ROWS_LIMIT`] rows.
///
fn push_comparison_table(content: &mut String, results: &[RegressionResult], change_sign: &str) {
    content.push_str("| Test Name | Baseline (μs) | Current (μs) | Change (%) | Confidence |\n");
    content.push_str("|-----------|---------------|--------------|------------|------------|\n");
    for result in results.iter().take(TABLE_ROWS_LIMIT) {
        content.push_str(
            format!(
                "| {} | {:.2} | {:.2} | {change_sign}{:.1}% | {:.0}% |\n",
                result.test_name,
                result.baseline_performance,
                result.current_performance,
                result.change_percentage * 100.0,
                result.confidence_level * 100.0,
            )
            .as_str(),
        );
    }
    content.push('\n');
}
