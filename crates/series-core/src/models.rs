use serde::{Deserialize, Serialize};

/// A single validated entry of the monthly series.
///
/// Produced by the loader and never mutated afterwards; aggregation reads
/// records by reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Period key exactly as written in the source, e.g. `"1950-01"`.
    pub period: String,
    /// Non-negative count observed in that period.
    pub value: u64,
}

impl Record {
    /// The year component of the period: everything before the first `-`.
    pub fn year(&self) -> &str {
        self.period
            .split_once('-')
            .map_or(self.period.as_str(), |(year, _)| year)
    }

    /// The month component of the period: everything after the first `-`,
    /// as written in the source. Validated periods carry a one or two digit
    /// month, so `"01"` and `"1"` both occur.
    pub fn month(&self) -> &str {
        self.period.split_once('-').map_or("", |(_, month)| month)
    }
}

/// The months attaining one year's extreme values.
///
/// Serializes as `{"min": [..], "max": [..]}`: the numeric extremes themselves
/// are not part of the output shape, only the months that reached them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearExtrema {
    /// Months tied for the year's minimum value, sorted by numeric month.
    #[serde(rename = "min")]
    pub min_months: Vec<String>,
    /// Months tied for the year's maximum value, sorted by numeric month.
    #[serde(rename = "max")]
    pub max_months: Vec<String>,
}
