//! Data pipeline for the monthly series.
//!
//! Responsible for reading and validating the comma-separated monthly series
//! and computing per-year extrema from the validated records.

pub mod analysis;
pub mod extrema;
pub mod loader;

pub use series_core as core;
