//!
//! A comparison between a baseline and a current measurement.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A comparison between a baseline and a current measurement sharing
/// the same composite key.
///
/// `is_regression` and `is_improvement` are mutually exclusive, and both
/// are `false` when the change magnitude does not exceed the threshold.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// The benchmark name.
    pub test_name: String,
    /// The baseline average time in microseconds.
    pub baseline_performance: f64,
    /// The current average time in microseconds.
    pub current_performance: f64,
    /// The signed relative change, `(current - baseline) / baseline`.
    pub change_percentage: f64,
    /// Whether the change exceeds the threshold upwards.
    pub is_regression: bool,
    /// Whether the change exceeds the threshold downwards.
    pub is_improvement: bool,
    /// The change magnitude relative to the combined coefficient of variation.
    pub statistical_significance: f64,
    /// A confidence proxy in the [0; 1] range derived from the significance.
    /// Not a principled statistical confidence interval.
    pub confidence_level: f64,
}
