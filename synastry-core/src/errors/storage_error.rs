//! Result cache storage errors.

use super::error_code::{self, SynastryErrorCode};

/// Errors from the SQLite-backed result cache.
///
/// The cache layer catches these, logs at warn, and degrades to
/// "no cache"; a storage failure never fails a compatibility lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("database busy (another operation in progress)")]
    DbBusy,

    #[error("migration to schema v{version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("cached result malformed: {message}")]
    CorruptEntry { message: String },
}

impl SynastryErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DbBusy => error_code::DB_BUSY,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::DatabaseBusy =>
            {
                Self::DbBusy
            }
            other => Self::SqliteError {
                message: other.to_string(),
            },
        }
    }
}
