//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold string could not be parsed as a number.
    #[error("failed to parse {name}='{value}': {source}")]
    ThresholdParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Threshold is outside the cosine range.
    #[error("{name} is {value}, expected a value within [-1.0, 1.0]")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
