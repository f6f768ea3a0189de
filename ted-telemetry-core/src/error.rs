//! Error types for ted-telemetry-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ted-telemetry-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Log line is valid JSON but not an event object
    #[error("not a JSON object: found {found}")]
    NotAnObject { found: &'static str },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Telemetry log does not exist
    #[error("log file not found at: {}", path.display())]
    LogNotFound { path: PathBuf },
}

/// Result type alias for ted-telemetry-core
pub type Result<T> = std::result::Result<T, Error>;
