//! Top-level error aggregation.

use super::error_code::SynastryErrorCode;
use super::{ConfigError, LoadError, StorageError, ValidationError};

/// Aggregate error for callers driving the whole pipeline.
///
/// Integrity errors are deliberately absent: they are logged and answered
/// with a neutral default inside the matrix layer, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SynastryErrorCode for MatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
