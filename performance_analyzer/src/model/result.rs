//!
//! A single measured benchmark sample.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single measured benchmark sample.
///
/// Constructed once per loaded JSON entry and immutable thereafter.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// The benchmark name.
    pub test_name: String,
    /// The benchmark category.
    pub category: String,
    /// The ECS architecture variant the benchmark ran against.
    pub architecture: String,
    /// The number of entities in the workload.
    pub entity_count: u64,
    /// The average iteration time in microseconds.
    pub average_time_us: f64,
    /// The minimum iteration time in microseconds.
    pub min_time_us: f64,
    /// The maximum iteration time in microseconds.
    pub max_time_us: f64,
    /// The standard deviation of the iteration time in microseconds.
    pub std_deviation_us: f64,
    /// The processing throughput in entities per second.
    pub entities_per_second: f64,
    /// The memory usage in bytes.
    pub memory_usage: u64,
    /// The cache hit ratio in the [0; 1] range.
    pub cache_hit_ratio: f64,
    /// The measurement timestamp, ISO-8601.
    pub timestamp: String,
    /// The platform tag.
    pub platform: String,
    /// The build configuration tag.
    pub build_config: String,
}

impl PerformanceResult {
    ///
    /// The composite key matching corresponding baseline and current records.
    ///
    pub fn key(&self) -> (&str, &str, u64) {
        (
            self.test_name.as_str(),
            self.architecture.as_str(),
            self.entity_count,
        )
    }
}
