//! Series loading and validation.
//!
//! Reads a comma-separated monthly series from disk and converts it into
//! validated [`Record`]s, skipping noise lines and failing hard on duplicate
//! or regressing timestamps.

use std::io::BufRead;
use std::path::Path;

use series_core::error::{DataError, Result};
use series_core::models::Record;
use series_core::settings::YearRange;
use tracing::debug;

// ── SeriesLoader ──────────────────────────────────────────────────────────────

/// Loads and validates a monthly `date,count` series from a text source.
pub struct SeriesLoader {
    /// Years admitted by the validation ladder.
    years: YearRange,
}

impl SeriesLoader {
    /// Create a loader that accepts years inside `years`.
    pub fn new(years: YearRange) -> Self {
        Self { years }
    }

    /// Load and validate the series at `path`.
    ///
    /// Returns the records in source order. Individual malformed lines are
    /// skipped silently; a duplicate or regressing timestamp among the valid
    /// lines, an unreadable source, or a fully empty result aborts the load
    /// with a [`DataError`].
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| DataError::SourceNotReadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.read_from(std::io::BufReader::new(file), path)
    }

    /// Validation pass over an open reader.
    ///
    /// `previous` carries the `year*12 + month` timestamp of the last valid
    /// record through the loop; ordering and uniqueness are enforced against
    /// it. Only valid records advance it.
    fn read_from(&self, reader: impl BufRead, path: &Path) -> Result<Vec<Record>> {
        let mut records: Vec<Record> = Vec::new();
        let mut previous: Option<u64> = None;
        let mut lines_read = 0u64;
        let mut lines_skipped = 0u64;

        for line_result in reader.lines() {
            let line = line_result.map_err(|e| DataError::SourceNotReadable {
                path: path.to_path_buf(),
                source: e,
            })?;
            lines_read += 1;

            let Some(parsed) = parse_line(&line, &self.years) else {
                lines_skipped += 1;
                debug!(
                    "Skipping line {} in {}: {:?}",
                    lines_read,
                    path.display(),
                    line
                );
                continue;
            };

            if let Some(prev) = previous {
                if parsed.timestamp == prev {
                    return Err(DataError::DuplicateTimestamp { line });
                }
                if parsed.timestamp < prev {
                    return Err(DataError::TimestampOutOfOrder { line });
                }
            }

            previous = Some(parsed.timestamp);
            records.push(Record {
                period: parsed.period,
                value: parsed.value,
            });
        }

        if records.is_empty() {
            return Err(DataError::EmptyData);
        }

        debug!(
            "Loaded {} records from {}: {} lines read, {} skipped",
            records.len(),
            path.display(),
            lines_read,
            lines_skipped
        );

        Ok(records)
    }
}

// ── Line validation ───────────────────────────────────────────────────────────

/// One line that survived the validation ladder.
struct ParsedLine {
    /// The date field exactly as written, e.g. `"1950-01"`.
    period: String,
    value: u64,
    /// Ordering key `year*12 + month`.
    timestamp: u64,
}

/// Run the per-line validation ladder.
///
/// Returns `None` for any line to be skipped as noise: fewer than two
/// comma-separated fields, a date that is not exactly two all-digit
/// components, a count that is not all digits (signs and decimal points
/// included, so negatives never parse), a month outside 1..=12, or a year
/// outside `years`. Fields beyond the second are ignored.
fn parse_line(line: &str, years: &YearRange) -> Option<ParsedLine> {
    let trimmed = line.trim();

    let mut fields = trimmed.split(',');
    let date = fields.next()?;
    let raw_value = fields.next()?;

    let mut components = date.split('-');
    let (year_str, month_str) = (components.next()?, components.next()?);
    if components.next().is_some() {
        return None;
    }
    if !is_digits(year_str) || !is_digits(month_str) {
        return None;
    }

    let value_str = raw_value.trim();
    if !is_digits(value_str) {
        return None;
    }
    let value: u64 = value_str.parse().ok()?;

    let month: u32 = month_str.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let year: u32 = year_str.parse().ok()?;
    if !years.contains(year) {
        return None;
    }

    Some(ParsedLine {
        period: date.to_string(),
        value,
        timestamp: u64::from(year) * 12 + u64::from(month),
    })
}

/// `true` when `s` is non-empty and entirely ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
