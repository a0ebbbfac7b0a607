//! Core error types for cyclecare-core.
//!
//! This module defines the error types using thiserror so that the CLI and
//! any other frontend get structured, reportable failures. Each concern has
//! its own enum; functions return the one that applies.

use std::path::PathBuf;
use thiserror::Error;

/// Validation errors.
///
/// Settings are rejected before any cycle math runs; a zero `cycle_length`
/// would make the cycle-day modulo undefined.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Field must be a positive number of days
    #[error("Invalid value for '{field}': must be at least 1 day, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    /// Period cannot outlast the cycle containing it
    #[error(
        "Period length ({period_length}) cannot exceed cycle length ({cycle_length})"
    )]
    PeriodExceedsCycle {
        period_length: i64,
        cycle_length: i64,
    },

    /// Date string not in YYYY-MM-DD form
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Mood score outside the 1-5 scale
    #[error("Invalid mood score {value}: expected 1-5")]
    InvalidMood { value: u8 },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read/write data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize record: {0}")]
    SerializeFailed(#[from] serde_json::Error),

    #[error("Invalid record in {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
