//! Match matrix load errors.

use super::error_code::{self, SynastryErrorCode};

/// Errors from loading the precomputed match matrix.
///
/// A failed load resets the cache to Unloaded; the next call retries.
/// Nothing here is fatal; callers surface an "unavailable" state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("matrix source failed: {message}")]
    SourceFailed { message: String },

    #[error("matrix document malformed: {message}")]
    MalformedDocument { message: String },

    #[error("matrix grid incomplete: expected {expected} rows, got {actual}")]
    IncompleteGrid { expected: usize, actual: usize },

    /// The single in-flight load this caller coalesced onto failed.
    /// The loader has been reset; calling again starts a fresh load.
    #[error("coalesced matrix load failed; retry will start a fresh load")]
    CoalescedLoadFailed,
}

impl SynastryErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CoalescedLoadFailed => error_code::LOAD_COALESCED_FAILURE,
            _ => error_code::LOAD_ERROR,
        }
    }
}
