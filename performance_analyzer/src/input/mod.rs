//!
//! The benchmark result loader.
//!
//! Upstream benchmark harnesses are inconsistent in field naming across
//! versions, so every field is extracted through an ordered list of
//! accepted key names, and values are coerced to the target type.
//! A record that fails coercion is skipped with a warning; a file that
//! fails to read or parse yields an empty set with a warning. Neither
//! condition escapes the loader.
//!

use std::path::Path;
use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;
use serde_json::Map;
use serde_json::Value;

use crate::model::result::PerformanceResult;

/// The accepted key names for the benchmark name, tried in order.
pub const NAME_KEYS: &[&str] = &["name", "test_name"];
/// The accepted key names for the benchmark category.
pub const CATEGORY_KEYS: &[&str] = &["category"];
/// The accepted key names for the architecture tag.
pub const ARCHITECTURE_KEYS: &[&str] = &["architecture", "architecture_type"];
/// The accepted key names for the workload entity count.
pub const ENTITY_COUNT_KEYS: &[&str] = &["entity_count"];
/// The accepted key names for the average time.
pub const AVERAGE_TIME_KEYS: &[&str] = &["real_time", "average_time_us"];
/// The accepted key names for the minimum time.
pub const MIN_TIME_KEYS: &[&str] = &["min_time", "min_time_us"];
/// The accepted key names for the maximum time.
pub const MAX_TIME_KEYS: &[&str] = &["max_time", "max_time_us"];
/// The accepted key names for the time standard deviation.
pub const STD_DEVIATION_KEYS: &[&str] = &["stddev", "std_deviation_us"];
/// The accepted key names for the throughput.
pub const THROUGHPUT_KEYS: &[&str] = &["entities_per_second"];
/// The accepted key names for the memory usage.
pub const MEMORY_USAGE_KEYS: &[&str] = &["memory_usage", "peak_memory_usage"];
/// The accepted key names for the cache hit ratio.
pub const CACHE_HIT_RATIO_KEYS: &[&str] = &["cache_hit_ratio"];
/// The accepted key names for the measurement timestamp.
pub const TIMESTAMP_KEYS: &[&str] = &["timestamp"];
/// The accepted key names for the platform tag.
pub const PLATFORM_KEYS: &[&str] = &["platform"];
/// The accepted key names for the build configuration tag.
pub const BUILD_CONFIG_KEYS: &[&str] = &["build_config"];

///
/// Errors failing the load of a whole results file.
///
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("results file {path:?} reading: {source}")]
    Reading {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file contents are not valid JSON.
    #[error("results file {path:?} parsing: {source}")]
    Parsing {
        /// The file path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

///
/// Loads performance results from a JSON file.
///
/// A missing file or malformed JSON yields an empty vector and one
/// warning line; individual malformed entries are skipped the same way.
///
pub fn load_results(path: &Path) -> Vec<PerformanceResult> {
    match try_load_results(path) {
        Ok(results) => results,
        Err(error) => {
            eprintln!("{} {error}", "Warning:".bright_yellow());
            Vec::new()
        }
    }
}

///
/// Loads performance results from a JSON file, surfacing file-level errors.
///
pub fn try_load_results(path: &Path) -> Result<Vec<PerformanceResult>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|error| LoadError::Reading {
        path: path.to_owned(),
        source: error,
    })?;
    let json: Value = serde_json::from_str(text.as_str()).map_err(|error| LoadError::Parsing {
        path: path.to_owned(),
        source: error,
    })?;

    let entries: Vec<Value> = match json {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object
            .remove("benchmarks")
            .or_else(|| object.remove("results"))
        {
            Some(Value::Array(entries)) => entries,
            Some(other) => vec![other],
            None => vec![Value::Object(object)],
        },
        other => {
            eprintln!(
                "{} results file {path:?} contains neither an array nor an object: {other}",
                "Warning:".bright_yellow(),
            );
            Vec::new()
        }
    };

    let mut results = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let object = match entry {
            Value::Object(object) => object,
            other => {
                eprintln!(
                    "{} skipping entry #{index} in {path:?}: expected an object, found {other}",
                    "Warning:".bright_yellow(),
                );
                continue;
            }
        };
        match parse_entry(&object) {
            Ok(result) => results.push(result),
            Err(error) => eprintln!(
                "{} skipping entry #{index} in {path:?}: {error}",
                "Warning:".bright_yellow(),
            ),
        }
    }
    Ok(results)
}

///
/// Expands input paths, resolving directories to the JSON files under them.
///
pub fn resolve_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut resolved = Vec::with_capacity(paths.len());
    for path in paths.iter() {
        if path.is_dir() {
            let pattern = format!("{}/**/*.json", path.to_string_lossy());
            for entry in glob::glob(pattern.as_str())?.filter_map(Result::ok) {
                resolved.push(entry);
            }
        } else {
            resolved.push(path.clone());
        }
    }
    Ok(resolved)
}

///
/// Normalizes one raw JSON entry into a performance result.
///
fn parse_entry(object: &Map<String, Value>) -> anyhow::Result<PerformanceResult> {
    Ok(PerformanceResult {
        test_name: string_field(object, NAME_KEYS)?.unwrap_or_else(|| "Unknown".to_owned()),
        category: string_field(object, CATEGORY_KEYS)?.unwrap_or_else(|| "Unknown".to_owned()),
        architecture: string_field(object, ARCHITECTURE_KEYS)?
            .unwrap_or_else(|| "Unknown".to_owned()),
        entity_count: u64_field(object, ENTITY_COUNT_KEYS)?.unwrap_or(0),
        average_time_us: f64_field(object, AVERAGE_TIME_KEYS)?.unwrap_or(0.0),
        min_time_us: f64_field(object, MIN_TIME_KEYS)?.unwrap_or(0.0),
        max_time_us: f64_field(object, MAX_TIME_KEYS)?.unwrap_or(0.0),
        std_deviation_us: f64_field(object, STD_DEVIATION_KEYS)?.unwrap_or(0.0),
        entities_per_second: f64_field(object, THROUGHPUT_KEYS)?.unwrap_or(0.0),
        memory_usage: u64_field(object, MEMORY_USAGE_KEYS)?.unwrap_or(0),
        cache_hit_ratio: f64_field(object, CACHE_HIT_RATIO_KEYS)?.unwrap_or(0.0),
        timestamp: string_field(object, TIMESTAMP_KEYS)?
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
        platform: string_field(object, PLATFORM_KEYS)?.unwrap_or_else(|| "unknown".to_owned()),
        build_config: string_field(object, BUILD_CONFIG_KEYS)?
            .unwrap_or_else(|| "unknown".to_owned()),
    })
}

///
/// Extracts the first present key as a string.
///
fn string_field(object: &Map<String, Value>, keys: &[&str]) -> anyhow::Result<Option<String>> {
    for key in keys.iter() {
        if let Some(value) = object.get(*key) {
            return match value {
                Value::String(string) => Ok(Some(string.clone())),
                Value::Number(number) => Ok(Some(number.to_string())),
                _ => anyhow::bail!("field `{key}` value {value} is not a string"),
            };
        }
    }
    Ok(None)
}

///
/// Extracts the first present key as a float, accepting numeric strings.
///
fn f64_field(object: &Map<String, Value>, keys: &[&str]) -> anyhow::Result<Option<f64>> {
    for key in keys.iter() {
        if let Some(value) = object.get(*key) {
            let number = match value {
                Value::Number(number) => number.as_f64(),
                Value::String(string) => string.trim().parse::<f64>().ok(),
                _ => None,
            };
            return match number {
                Some(number) => Ok(Some(number)),
                None => anyhow::bail!("field `{key}` value {value} is not a number"),
            };
        }
    }
    Ok(None)
}

///
/// Extracts the first present key as a non-negative integer.
/// Float values are truncated, numeric strings are accepted.
///
fn u64_field(object: &Map<String, Value>, keys: &[&str]) -> anyhow::Result<Option<u64>> {
    for key in keys.iter() {
        if let Some(value) = object.get(*key) {
            let number = match value {
                Value::Number(number) => number.as_u64().or_else(|| {
                    number
                        .as_f64()
                        .filter(|number| number.is_finite() && *number >= 0.0)
                        .map(|number| number as u64)
                }),
                Value::String(string) => string.trim().parse::<u64>().ok().or_else(|| {
                    string
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|number| number.is_finite() && *number >= 0.0)
                        .map(|number| number as u64)
                }),
                _ => None,
            };
            return match number {
                Some(number) => Ok(Some(number)),
                None => {
                    anyhow::bail!("field `{key}` value {value} is not a non-negative integer")
                }
            };
        }
    }
    Ok(None)
}
