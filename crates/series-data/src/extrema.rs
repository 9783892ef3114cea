//! Per-year extrema over a validated series.
//!
//! Groups records by year and reports, for each year, every month whose value
//! attains the year's minimum and every month attaining its maximum.

use std::collections::BTreeMap;

use series_core::models::{Record, YearExtrema};

// ── ExtremaAggregator ─────────────────────────────────────────────────────────

/// Computes per-year min/max month sets from validated records.
pub struct ExtremaAggregator;

impl ExtremaAggregator {
    /// Aggregate `records` into a per-year extrema map keyed by year.
    ///
    /// Months are reported exactly as written in the source and sorted by
    /// their numeric value. An empty input yields an empty map.
    pub fn aggregate(records: &[Record]) -> BTreeMap<String, YearExtrema> {
        let mut by_year: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
        for record in records {
            by_year.entry(record.year()).or_default().push(record);
        }

        let mut extrema = BTreeMap::new();
        for (year, year_records) in by_year {
            let mut min_value = u64::MAX;
            let mut max_value = u64::MIN;
            for record in &year_records {
                min_value = min_value.min(record.value);
                max_value = max_value.max(record.value);
            }

            // Both checks run for every record; when a year's minimum equals
            // its maximum the two lists carry the same months.
            let mut min_months = Vec::new();
            let mut max_months = Vec::new();
            for record in &year_records {
                if record.value == min_value {
                    min_months.push(record.month().to_string());
                }
                if record.value == max_value {
                    max_months.push(record.month().to_string());
                }
            }

            sort_months(&mut min_months);
            sort_months(&mut max_months);

            extrema.insert(
                year.to_string(),
                YearExtrema {
                    min_months,
                    max_months,
                },
            );
        }

        extrema
    }
}

/// Sort month strings by numeric value so unpadded entries keep calendar
/// order, then drop exact consecutive duplicates.
fn sort_months(months: &mut Vec<String>) {
    months.sort_by_key(|month| month.parse::<u32>().unwrap_or(0));
    months.dedup();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
