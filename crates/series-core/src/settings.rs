use serde::{Deserialize, Serialize};
use tracing::warn;

/// Inclusive bounds on the years the loader accepts.
///
/// The supported window is configuration, not a constant: the default covers
/// 1949 through 1960, the span of the classic monthly passenger-count series,
/// and callers working with other data sets supply their own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Earliest accepted year.
    pub min_year: u32,
    /// Latest accepted year.
    pub max_year: u32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min_year: 1949,
            max_year: 1960,
        }
    }
}

impl YearRange {
    /// Create a range from inclusive bounds.
    ///
    /// Inverted bounds are swapped (with a warning) instead of producing a
    /// range that matches no year.
    pub fn new(min_year: u32, max_year: u32) -> Self {
        if min_year > max_year {
            warn!(
                "YearRange: inverted bounds {}..{}, swapping",
                min_year, max_year
            );
            return Self {
                min_year: max_year,
                max_year: min_year,
            };
        }
        Self { min_year, max_year }
    }

    /// Whether `year` falls inside the range.
    pub fn contains(&self, year: u32) -> bool {
        year >= self.min_year && year <= self.max_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_classic_span() {
        let range = YearRange::default();
        assert_eq!(range.min_year, 1949);
        assert_eq!(range.max_year, 1960);
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let range = YearRange::default();
        assert!(range.contains(1949));
        assert!(range.contains(1955));
        assert!(range.contains(1960));
        assert!(!range.contains(1948));
        assert!(!range.contains(1961));
    }

    #[test]
    fn test_new_keeps_ordered_bounds() {
        let range = YearRange::new(2000, 2010);
        assert_eq!(range.min_year, 2000);
        assert_eq!(range.max_year, 2010);
    }

    #[test]
    fn test_new_swaps_inverted_bounds() {
        let range = YearRange::new(2010, 2000);
        assert_eq!(range.min_year, 2000);
        assert_eq!(range.max_year, 2010);
        assert!(range.contains(2005));
    }

    #[test]
    fn test_single_year_range() {
        let range = YearRange::new(1950, 1950);
        assert!(range.contains(1950));
        assert!(!range.contains(1949));
        assert!(!range.contains(1951));
    }

    #[test]
    fn test_serde_round_trip() {
        let range = YearRange::new(1949, 1960);
        let json = serde_json::to_string(&range).unwrap();
        let back: YearRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
