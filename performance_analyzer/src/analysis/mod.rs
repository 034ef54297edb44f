//!
//! Performance regression detection and report assembly.
//!

pub mod insights;
pub mod memory;
pub mod recommendations;

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use chrono::Utc;

use crate::input;
use crate::model::regression::RegressionResult;
use crate::model::report::AnalysisReport;
use crate::model::report::CrossPlatformAnalysis;
use crate::model::report::Summary;
use crate::model::result::PerformanceResult;
use crate::util;

/// Guards the significance denominator against a zero combined variation.
pub const SIGNIFICANCE_EPSILON: f64 = 1e-10;

/// The cap of the confidence proxy.
pub const CONFIDENCE_CAP: f64 = 0.99;

/// Pairs at or below this confidence are dropped as noise.
pub const CONFIDENCE_FLOOR: f64 = 0.5;

///
/// Detects performance regressions and improvements of `current` against `baseline`.
///
/// Records are paired by the composite key (test name, architecture,
/// entity count), last write wins on duplicate baseline keys. Pairs with
/// a zero baseline time are excluded. A pair is kept only when its
/// confidence proxy exceeds [`CONFIDENCE_FLOOR`]. Regressions are sorted
/// by descending change, improvements by ascending change.
///
pub fn detect_regressions(
    baseline: &[PerformanceResult],
    current: &[PerformanceResult],
    threshold: f64,
) -> (Vec<RegressionResult>, Vec<RegressionResult>) {
    let mut regressions = Vec::new();
    let mut improvements = Vec::new();

    let mut baseline_lookup: BTreeMap<(&str, &str, u64), &PerformanceResult> = BTreeMap::new();
    for result in baseline.iter() {
        baseline_lookup.insert(result.key(), result);
    }

    for current_result in current.iter() {
        let baseline_result = match baseline_lookup.get(&current_result.key()) {
            Some(baseline_result) => *baseline_result,
            None => continue,
        };

        let baseline_performance = baseline_result.average_time_us;
        let current_performance = current_result.average_time_us;
        if baseline_performance == 0.0 {
            continue;
        }

        let change_percentage = (current_performance - baseline_performance) / baseline_performance;

        let baseline_cv = if baseline_performance > 0.0 {
            baseline_result.std_deviation_us / baseline_performance
        } else {
            0.0
        };
        let current_cv = if current_performance > 0.0 {
            current_result.std_deviation_us / current_performance
        } else {
            0.0
        };
        let combined_variation = (baseline_cv.powi(2) + current_cv.powi(2)).sqrt();

        let statistical_significance =
            change_percentage.abs() / (combined_variation + SIGNIFICANCE_EPSILON);
        let confidence_level = (statistical_significance / 3.0).min(CONFIDENCE_CAP);

        let result = RegressionResult {
            test_name: current_result.test_name.clone(),
            baseline_performance,
            current_performance,
            change_percentage,
            is_regression: change_percentage > threshold,
            is_improvement: change_percentage < -threshold,
            statistical_significance,
            confidence_level,
        };

        if result.is_regression && confidence_level > CONFIDENCE_FLOOR {
            regressions.push(result);
        } else if result.is_improvement && confidence_level > CONFIDENCE_FLOOR {
            improvements.push(result);
        }
    }

    regressions.sort_by(|lhs, rhs| rhs.change_percentage.total_cmp(&lhs.change_percentage));
    improvements.sort_by(|lhs, rhs| lhs.change_percentage.total_cmp(&rhs.change_percentage));

    (regressions, improvements)
}

///
/// The performance analysis engine.
///
/// Stateless across runs: the on-disk artifacts of one run serve as the
/// next run's baseline input.
///
#[derive(Debug)]
pub struct Analyzer {
    /// The relative change above which a pair counts as a regression.
    regression_threshold: f64,
}

impl Analyzer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(regression_threshold: f64) -> Self {
        Self {
            regression_threshold,
        }
    }

    ///
    /// Runs the complete analysis over the current result files and an
    /// optional baseline file.
    ///
    /// Fails when no usable current results are loaded, since an empty
    /// analysis is meaningless. A missing or empty baseline is tolerated:
    /// the report is produced with empty regression lists.
    ///
    pub fn run(
        &self,
        current_paths: &[PathBuf],
        baseline_path: Option<&Path>,
    ) -> anyhow::Result<AnalysisReport> {
        let mut current_results = Vec::new();
        for path in input::resolve_paths(current_paths)?.iter() {
            current_results.extend(input::load_results(path.as_path()));
        }
        if current_results.is_empty() {
            anyhow::bail!("No current performance results found");
        }

        let baseline_results = match baseline_path {
            Some(path) => input::load_results(path),
            None => Vec::new(),
        };
        let has_baseline = !baseline_results.is_empty();

        let (regressions, improvements) = if has_baseline {
            detect_regressions(
                baseline_results.as_slice(),
                current_results.as_slice(),
                self.regression_threshold,
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let memory_analysis = memory::analyze(current_results.as_slice());
        let educational_insights = insights::generate(
            current_results.as_slice(),
            regressions.as_slice(),
            improvements.as_slice(),
        );
        let optimization_recommendations = recommendations::generate(
            current_results.as_slice(),
            regressions.as_slice(),
            &memory_analysis,
        );

        let average_times: Vec<f64> = current_results
            .iter()
            .map(|result| result.average_time_us)
            .collect();
        let summary = Summary {
            total_tests: current_results.len(),
            test_categories: current_results
                .iter()
                .map(|result| result.category.as_str())
                .collect::<BTreeSet<&str>>()
                .len(),
            architectures_tested: current_results
                .iter()
                .map(|result| result.architecture.as_str())
                .collect::<BTreeSet<&str>>()
                .len(),
            entity_counts_tested: current_results
                .iter()
                .map(|result| result.entity_count)
                .filter(|count| *count > 0)
                .collect::<BTreeSet<u64>>()
                .into_iter()
                .collect(),
            average_performance_us: util::mean(average_times.as_slice()),
            performance_variance: util::std_deviation(average_times.as_slice()),
            regressions_detected: regressions.len(),
            improvements_detected: improvements.len(),
            has_baseline,
        };

        let platforms: BTreeSet<&str> = current_results
            .iter()
            .map(|result| result.platform.as_str())
            .filter(|platform| *platform != "unknown")
            .collect();
        let cross_platform_analysis = CrossPlatformAnalysis {
            platform_count: platforms.len(),
            platforms_tested: platforms
                .into_iter()
                .map(|platform| platform.to_owned())
                .collect(),
        };

        Ok(AnalysisReport {
            summary,
            regressions,
            improvements,
            cross_platform_analysis,
            memory_analysis,
            educational_insights,
            optimization_recommendations,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
