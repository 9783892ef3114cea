//! Core types for the monthly series pipeline.
//!
//! Defines the validated record and extrema models, the single pipeline
//! error type, and the loader's year-range configuration.

pub mod error;
pub mod models;
pub mod settings;
