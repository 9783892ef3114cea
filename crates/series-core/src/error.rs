use std::path::PathBuf;
use thiserror::Error;

/// The single error kind produced by the series pipeline.
///
/// Every failure carries a human-readable diagnostic; the variants exist to
/// hold each diagnostic's payload (the offending raw line, or the path and
/// underlying I/O error), not to form a taxonomy callers branch on.
#[derive(Error, Debug)]
pub enum DataError {
    /// Two valid records mapped to the same `year*12 + month` timestamp.
    #[error("duplicate timestamp, line: {line}")]
    DuplicateTimestamp { line: String },

    /// A valid record's timestamp fell below the previous valid record's.
    #[error("timestamp out of order, line: {line}")]
    TimestampOutOfOrder { line: String },

    /// No valid record survived the load.
    #[error("empty data list")]
    EmptyData,

    /// The source could not be opened or read.
    #[error("source not found or not readable: {path}")]
    SourceNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the series crates.
pub type Result<T> = std::result::Result<T, DataError>;
