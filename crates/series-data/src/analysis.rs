//! End-to-end series analysis.
//!
//! Composes loading and extrema aggregation into a single call and records
//! run metadata alongside the results.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use series_core::error::Result;
use series_core::models::{Record, YearExtrema};
use series_core::settings::YearRange;
use tracing::debug;

use crate::extrema::ExtremaAggregator;
use crate::loader::SeriesLoader;

// ── Results ───────────────────────────────────────────────────────────────────

/// Timing and volume metadata for one analysis run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// Validated records the loader produced.
    pub records_loaded: usize,
    /// Distinct years in the extrema map.
    pub years_covered: usize,
    pub load_time_seconds: f64,
    pub aggregate_time_seconds: f64,
}

/// Full output of one analysis run.
#[derive(Debug, Clone)]
pub struct SeriesAnalysis {
    /// Validated records in source order.
    pub records: Vec<Record>,
    /// Per-year extrema keyed by year.
    pub extrema: BTreeMap<String, YearExtrema>,
    pub metadata: AnalysisMetadata,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Load the series at `path` and compute its per-year extrema.
///
/// Loader failures propagate unchanged, so the analysis never runs over a
/// partially validated series.
pub fn analyze_series(path: impl AsRef<Path>, years: YearRange) -> Result<SeriesAnalysis> {
    let load_start = Instant::now();
    let records = SeriesLoader::new(years).load(path)?;
    let load_time_seconds = load_start.elapsed().as_secs_f64();

    let aggregate_start = Instant::now();
    let extrema = ExtremaAggregator::aggregate(&records);
    let aggregate_time_seconds = aggregate_start.elapsed().as_secs_f64();

    let metadata = AnalysisMetadata {
        records_loaded: records.len(),
        years_covered: extrema.len(),
        load_time_seconds,
        aggregate_time_seconds,
    };

    debug!(
        "Analyzed {} records across {} years in {:.6}s",
        metadata.records_loaded,
        metadata.years_covered,
        load_time_seconds + aggregate_time_seconds
    );

    Ok(SeriesAnalysis {
        records,
        extrema,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
