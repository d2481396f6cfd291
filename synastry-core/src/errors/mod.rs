//! Error taxonomy for the Synastry engine.
//!
//! Caller mistakes surface as [`ValidationError`] and are never retried.
//! Matrix load failures surface as [`LoadError`] and are retryable.
//! Matrix gaps are [`DataIntegrityError`]s: logged, answered with a
//! neutral default, never raised to the caller. Storage failures are
//! swallowed by the result cache, which degrades to "no cache".

pub mod config_error;
pub mod error_code;
pub mod integrity_error;
pub mod load_error;
pub mod match_error;
pub mod storage_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::SynastryErrorCode;
pub use integrity_error::DataIntegrityError;
pub use load_error::LoadError;
pub use match_error::MatchError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
