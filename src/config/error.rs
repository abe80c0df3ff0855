//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Top-N value is zero (the shortlist would always be empty).
    #[error("invalid top-n '{value}': must be at least 1")]
    InvalidTopN { value: String },

    /// Top-N string could not be parsed as a number.
    #[error("failed to parse top-n '{value}': {source}")]
    TopNParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
