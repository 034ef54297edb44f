//!
//! The aggregate analysis report.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::regression::RegressionResult;

///
/// The aggregate analysis report, the terminal artifact of a run.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The summary statistics of the current result set.
    pub summary: Summary,
    /// The detected regressions, sorted by descending change.
    pub regressions: Vec<RegressionResult>,
    /// The detected improvements, sorted by ascending change.
    pub improvements: Vec<RegressionResult>,
    /// The cross-platform metadata.
    pub cross_platform_analysis: CrossPlatformAnalysis,
    /// The memory usage analysis.
    pub memory_analysis: MemoryAnalysis,
    /// The human-readable insight lines.
    pub educational_insights: Vec<String>,
    /// The human-readable recommendation lines.
    pub optimization_recommendations: Vec<String>,
    /// The report generation timestamp, ISO-8601.
    pub timestamp: String,
}

///
/// The summary statistics of the current result set.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The number of current results analyzed.
    pub total_tests: usize,
    /// The number of distinct benchmark categories.
    pub test_categories: usize,
    /// The number of distinct architecture tags.
    pub architectures_tested: usize,
    /// The distinct nonzero entity counts, sorted ascending.
    pub entity_counts_tested: Vec<u64>,
    /// The mean average time across all current results, microseconds.
    pub average_performance_us: f64,
    /// The sample standard deviation of the average times, microseconds.
    pub performance_variance: f64,
    /// The number of detected regressions.
    pub regressions_detected: usize,
    /// The number of detected improvements.
    pub improvements_detected: usize,
    /// Whether a baseline result set was loaded.
    pub has_baseline: bool,
}

///
/// The cross-platform metadata of the current result set.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossPlatformAnalysis {
    /// The distinct platform tags other than `unknown`, sorted.
    pub platforms_tested: Vec<String>,
    /// The number of distinct platforms.
    pub platform_count: usize,
}

///
/// The memory usage analysis of the current result set.
///
/// Optional values are absent when no record carries the data they
/// are derived from, and are omitted from the JSON artifact.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryAnalysis {
    /// The number of current results analyzed.
    pub total_tests: usize,
    /// The number of results with nonzero memory usage.
    pub tests_with_memory_data: usize,
    /// The minimum memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_memory_usage: Option<u64>,
    /// The peak memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_usage: Option<u64>,
    /// The mean memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_memory_usage: Option<f64>,
    /// The median memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_memory_usage: Option<f64>,
    /// The sample standard deviation of the memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage_std: Option<f64>,
    /// The mean memory usage per entity in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_memory_per_entity: Option<f64>,
    /// The sample standard deviation of the per-entity memory usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_efficiency_variance: Option<f64>,
    /// The mean nonzero cache hit ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_cache_hit_ratio: Option<f64>,
    /// One minus the sample standard deviation of the cache hit ratios.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_performance_consistency: Option<f64>,
}
