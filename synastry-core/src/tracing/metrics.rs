//! Structured span field definitions for Synastry metrics.
//!
//! Consistent field names across subsystems enable structured log
//! queries without grepping free-form messages.

/// Matrix: full-grid load time in milliseconds.
pub const MATRIX_LOAD_TIME: &str = "matrix_load_time";

/// Matrix: number of grid entries loaded.
pub const MATRIX_ENTRY_COUNT: &str = "matrix_entry_count";

/// Engine: single pair scoring time in microseconds.
pub const SCORE_COMPUTE_TIME: &str = "score_compute_time";

/// Result cache: hit rate (0.0 - 1.0).
pub const CACHE_HIT_RATE: &str = "cache_hit_rate";

/// Storage: cache write-through time in milliseconds.
pub const CACHE_WRITE_TIME: &str = "cache_write_time";
