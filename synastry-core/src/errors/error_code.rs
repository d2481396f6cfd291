//! SynastryErrorCode trait for structured error codes.

/// Trait for attaching a stable, structured code to every error enum.
/// Codes are what downstream consumers (UI layer, log queries) match on;
/// display messages are free to change.
pub trait SynastryErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const LOAD_COALESCED_FAILURE: &str = "LOAD_COALESCED_FAILURE";
pub const DATA_INTEGRITY_ERROR: &str = "DATA_INTEGRITY_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
