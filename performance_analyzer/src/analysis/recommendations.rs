//!
//! Optimization recommendation lines derived from a result set.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::model::regression::RegressionResult;
use crate::model::report::MemoryAnalysis;
use crate::model::result::PerformanceResult;
use crate::util;

/// The per-entity memory usage in bytes above which a layout change is suggested.
const MEMORY_PER_ENTITY_LIMIT: f64 = 1000.0;
/// The cache consistency below which access patterns are flagged.
const CACHE_CONSISTENCY_FLOOR: f64 = 0.8;

///
/// Derives optimization recommendation lines from the current result set,
/// the detected regressions, and the memory analysis. Purely textual.
///
/// Falls back to a single baseline line when no rule fires.
///
pub fn generate(
    results: &[PerformanceResult],
    regressions: &[RegressionResult],
    memory_analysis: &MemoryAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(memory_per_entity) = memory_analysis.average_memory_per_entity {
        if memory_per_entity > MEMORY_PER_ENTITY_LIMIT {
            recommendations.push(
                "High Memory Usage: Consider using Structure of Arrays (SoA) data layout \
                instead of Array of Structures (AoS) to improve cache locality and reduce \
                memory overhead per entity."
                    .to_owned(),
            );
        }
    }

    if let Some(cache_consistency) = memory_analysis.cache_performance_consistency {
        if cache_consistency < CACHE_CONSISTENCY_FLOOR {
            recommendations.push(
                "Cache Performance Variance: High variance in cache hit ratios suggests \
                inconsistent memory access patterns. Consider implementing entity batching \
                or improving data locality through better component organization."
                    .to_owned(),
            );
        }
    }

    if !regressions.is_empty() {
        let mut categories: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for regression in regressions.iter() {
            let name = regression.test_name.to_lowercase();
            let category = if name.contains("ecs") {
                "ECS"
            } else if name.contains("memory") {
                "Memory"
            } else if name.contains("physics") {
                "Physics"
            } else {
                "Other"
            };
            categories
                .entry(category)
                .or_default()
                .push(regression.change_percentage);
        }
        for (category, changes) in categories.iter() {
            if changes.len() > 1 {
                let average_regression = util::mean(changes.as_slice());
                recommendations.push(format!(
                    "{category} System Optimization: Multiple regressions detected \
                    (avg: {:.1}%). Review recent changes to {} system implementation, \
                    particularly algorithm complexity and data structure modifications.",
                    average_regression * 100.0,
                    category.to_lowercase(),
                ));
            }
        }
    }

    let mut architectures: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for result in results.iter() {
        architectures
            .entry(result.architecture.as_str())
            .or_default()
            .push(result.average_time_us);
    }
    if architectures.len() > 1 {
        let best = architectures
            .iter()
            .map(|(architecture, times)| (*architecture, util::mean(times.as_slice())))
            .min_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1));
        if let Some((best_architecture, _)) = best {
            recommendations.push(format!(
                "Architecture Optimization: {best_architecture} architecture shows best performance \
                characteristics. Consider optimizing other architectures using similar \
                data layout and access patterns, or prioritize {best_architecture} for \
                performance-critical applications."
            ));
        }
    }

    let entity_counts: BTreeSet<u64> = results
        .iter()
        .map(|result| result.entity_count)
        .filter(|count| *count > 0)
        .collect();
    if entity_counts.len() > 2 {
        if let (Some(min_entities), Some(max_entities)) = (
            entity_counts.iter().next().copied(),
            entity_counts.iter().next_back().copied(),
        ) {
            let large_scale_times: Vec<f64> = results
                .iter()
                .filter(|result| (result.entity_count as f64) >= (max_entities as f64) * 0.8)
                .map(|result| result.average_time_us)
                .collect();
            let small_scale_times: Vec<f64> = results
                .iter()
                .filter(|result| (result.entity_count as f64) <= (min_entities as f64) * 1.2)
                .map(|result| result.average_time_us)
                .collect();
            if !large_scale_times.is_empty() && !small_scale_times.is_empty() {
                let small_scale_average = util::mean(small_scale_times.as_slice());
                if small_scale_average > 0.0 {
                    let scaling_factor =
                        util::mean(large_scale_times.as_slice()) / small_scale_average;
                    if scaling_factor > (max_entities as f64) / (min_entities as f64) {
                        recommendations.push(format!(
                            "Scaling Optimization: Performance degrades more than linearly with \
                            entity count (factor: {scaling_factor:.2}). Consider implementing \
                            spatial partitioning, level-of-detail systems, or parallel processing \
                            for large-scale scenarios."
                        ));
                    }
                }
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Performance Baseline: Current performance characteristics appear optimal \
            for the given workload. Continue monitoring for regressions and consider \
            profiling with production-like data for further optimization opportunities."
                .to_owned(),
        );
    }

    recommendations
}
