//!
//! Human-readable insight lines derived from a result set.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::model::regression::RegressionResult;
use crate::model::result::PerformanceResult;
use crate::util;

/// The slope below which scaling is labeled linear.
const SLOPE_LINEAR_LIMIT: f64 = 2.0;
/// The slope below which scaling is labeled quadratic.
const SLOPE_QUADRATIC_LIMIT: f64 = 10.0;

///
/// Derives descriptive insight lines from the current result set and the
/// detected regressions and improvements. Purely textual and advisory.
///
/// Always returns at least one line, so report sections never render blank.
///
pub fn generate(
    results: &[PerformanceResult],
    regressions: &[RegressionResult],
    improvements: &[RegressionResult],
) -> Vec<String> {
    if results.is_empty() {
        return vec!["No performance data available for analysis.".to_owned()];
    }

    let mut insights = Vec::new();

    let mut architectures: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for result in results.iter() {
        architectures
            .entry(result.architecture.as_str())
            .or_default()
            .push(result.average_time_us);
    }
    if architectures.len() > 1 {
        let averages: Vec<(&str, f64)> = architectures
            .iter()
            .map(|(architecture, times)| (*architecture, util::mean(times.as_slice())))
            .collect();
        let best = averages.iter().min_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1));
        let worst = averages.iter().max_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1));
        if let (Some((best_architecture, best_average)), Some((worst_architecture, worst_average))) =
            (best, worst)
        {
            if *best_average > 0.0 {
                let improvement_ratio = worst_average / best_average;
                insights.push(format!(
                    "ECS Architecture Analysis: {best_architecture} architecture performs {improvement_ratio:.2}x \
                    better than {worst_architecture} on average. This demonstrates the importance of \
                    data structure choice in high-performance systems."
                ));
            }
        }
    }

    // Informal label from a single least-squares slope. A heuristic for the
    // narrative, not a complexity proof.
    let entity_counts: BTreeSet<u64> = results
        .iter()
        .map(|result| result.entity_count)
        .filter(|count| *count > 0)
        .collect();
    if entity_counts.len() > 2 {
        let mut scaling_data = Vec::with_capacity(entity_counts.len());
        for count in entity_counts.iter() {
            let times: Vec<f64> = results
                .iter()
                .filter(|result| result.entity_count == *count)
                .map(|result| result.average_time_us)
                .collect();
            if !times.is_empty() {
                scaling_data.push((*count as f64, util::mean(times.as_slice())));
            }
        }
        if scaling_data.len() > 2 {
            if let Some(slope) = util::least_squares_slope(scaling_data.as_slice()) {
                if slope > 0.0 {
                    let complexity_class = if slope < SLOPE_LINEAR_LIMIT {
                        "linear"
                    } else if slope < SLOPE_QUADRATIC_LIMIT {
                        "quadratic"
                    } else {
                        "exponential"
                    };
                    insights.push(format!(
                        "Scaling Analysis: Performance appears to scale {complexity_class}ly with entity count \
                        (slope: {slope:.3}). This suggests the ECS implementation maintains good \
                        cache locality and avoids algorithmic bottlenecks."
                    ));
                }
            }
        }
    }

    let memory_usages: Vec<f64> = results
        .iter()
        .map(|result| result.memory_usage)
        .filter(|usage| *usage > 0)
        .map(|usage| usage as f64)
        .collect();
    if !memory_usages.is_empty() {
        let average_memory = util::mean(memory_usages.as_slice());
        let peak_memory = results
            .iter()
            .map(|result| result.memory_usage)
            .max()
            .unwrap_or(0);
        if (peak_memory as f64) > average_memory * 2.0 {
            insights.push(format!(
                "Memory Usage Pattern: Peak memory usage ({} bytes) is significantly \
                higher than average ({} bytes), indicating potential memory \
                fragmentation or inefficient allocation patterns.",
                util::group_digits(peak_memory),
                util::group_digits(average_memory.round() as u64),
            ));
        }
    }

    if let Some(worst_regression) = regressions
        .iter()
        .max_by(|lhs, rhs| lhs.change_percentage.total_cmp(&rhs.change_percentage))
    {
        insights.push(format!(
            "Performance Regression Alert: {} shows a {:.1}% performance degradation. \
            This could indicate algorithmic changes, cache misses, or memory layout issues.",
            worst_regression.test_name,
            worst_regression.change_percentage * 100.0,
        ));
    }

    if let Some(best_improvement) = improvements
        .iter()
        .min_by(|lhs, rhs| lhs.change_percentage.total_cmp(&rhs.change_percentage))
    {
        insights.push(format!(
            "Performance Improvement: {} shows a {:.1}% performance improvement. \
            This demonstrates the impact of optimizations in high-performance computing.",
            best_improvement.test_name,
            best_improvement.change_percentage.abs() * 100.0,
        ));
    }

    if insights.is_empty() {
        insights.push("No notable performance patterns detected in the current results.".to_owned());
    }

    insights
}
