//! Matrix data integrity errors.

use super::error_code::{self, SynastryErrorCode};
use crate::types::Combo;

/// A gap in the loaded 144x144 grid.
///
/// Over a fully enumerated grid this should be impossible; a gap signals
/// a data-generation defect. The engine is advisory, so the lookup path
/// logs this and answers a neutral fallback; it never reaches callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataIntegrityError {
    #[error("no matrix entry for {user} x {partner}")]
    MissingPair { user: Combo, partner: Combo },

    #[error("no matrix row for {combo}")]
    MissingRow { combo: Combo },
}

impl SynastryErrorCode for DataIntegrityError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_INTEGRITY_ERROR
    }
}
