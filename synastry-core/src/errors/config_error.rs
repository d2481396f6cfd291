//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, SynastryErrorCode};

/// Errors from loading or validating a Synastry config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    ParseFailed { message: String },

    #[error("invalid config field {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl SynastryErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
