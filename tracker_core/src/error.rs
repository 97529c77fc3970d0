//! Error types for the tracker_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sensor tag does not name a known activity
    #[error("Unknown activity type: {0}")]
    UnknownActivity(String),

    /// Package carries the wrong number of values for its activity
    #[error("Activity {tag} expects {expected} values, got {actual}")]
    ArityMismatch {
        tag: String,
        expected: usize,
        actual: usize,
    },

    /// Record field out of range (non-positive duration, negative magnitude, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A package failed with `source`; carries its position and tag
    #[error("package {index} ({tag}): {source}")]
    Package {
        index: usize,
        tag: String,
        source: Box<Error>,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
