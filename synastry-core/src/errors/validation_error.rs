//! Input validation errors.

use super::error_code::{self, SynastryErrorCode};

/// Errors for unrecognized sign/animal/combo tokens.
///
/// These are always the caller's fault and are surfaced before any
/// computation runs. The scoring pipeline is total once inputs validate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown Western sign: {token:?}")]
    UnknownSign { token: String },

    #[error("unknown Chinese animal: {token:?}")]
    UnknownAnimal { token: String },

    #[error("malformed combo key {key:?} (expected \"Sign-Animal\")")]
    MalformedComboKey { key: String },
}

impl SynastryErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
