//!
//! Memory usage analysis of a result set.
//!

use crate::model::report::MemoryAnalysis;
use crate::model::result::PerformanceResult;
use crate::util;

///
/// Computes memory usage statistics over the current result set.
///
/// Records with zero memory usage carry no memory data and are excluded
/// from the statistics; when none remain, only the counters are filled.
///
pub fn analyze(results: &[PerformanceResult]) -> MemoryAnalysis {
    let mut analysis = MemoryAnalysis {
        total_tests: results.len(),
        ..MemoryAnalysis::default()
    };

    let usages: Vec<u64> = results
        .iter()
        .map(|result| result.memory_usage)
        .filter(|usage| *usage > 0)
        .collect();
    if usages.is_empty() {
        return analysis;
    }

    let usages_f64: Vec<f64> = usages.iter().map(|usage| *usage as f64).collect();
    analysis.tests_with_memory_data = usages.len();
    analysis.min_memory_usage = usages.iter().copied().min();
    analysis.max_memory_usage = usages.iter().copied().max();
    analysis.average_memory_usage = Some(util::mean(usages_f64.as_slice()));
    analysis.median_memory_usage = Some(util::median(usages_f64.as_slice()));
    analysis.memory_usage_std = Some(util::std_deviation(usages_f64.as_slice()));

    let per_entity: Vec<f64> = results
        .iter()
        .filter(|result| result.memory_usage > 0 && result.entity_count > 0)
        .map(|result| (result.memory_usage as f64) / (result.entity_count as f64))
        .collect();
    if !per_entity.is_empty() {
        analysis.average_memory_per_entity = Some(util::mean(per_entity.as_slice()));
        analysis.memory_efficiency_variance = Some(util::std_deviation(per_entity.as_slice()));
    }

    let cache_ratios: Vec<f64> = results
        .iter()
        .map(|result| result.cache_hit_ratio)
        .filter(|ratio| *ratio > 0.0)
        .collect();
    if !cache_ratios.is_empty() {
        analysis.average_cache_hit_ratio = Some(util::mean(cache_ratios.as_slice()));
        analysis.cache_performance_consistency =
            Some(1.0 - util::std_deviation(cache_ratios.as_slice()));
    }

    analysis
}
