//! MatchEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing engine lifecycle events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` is required so
/// one handler can be shared across the matrix cache and its callers.
pub trait MatchEventHandler: Send + Sync {
    // ---- Matrix Lifecycle ----
    fn on_matrix_load_started(&self, _event: &MatrixLoadStartedEvent) {}
    fn on_matrix_load_complete(&self, _event: &MatrixLoadCompleteEvent) {}
    fn on_matrix_load_failed(&self, _event: &MatrixLoadFailedEvent) {}
    fn on_integrity_gap(&self, _event: &IntegrityGapEvent) {}

    // ---- Scoring ----
    fn on_override_applied(&self, _event: &OverrideAppliedEvent) {}

    // ---- Result Cache ----
    fn on_cache_hit(&self, _event: &CacheHitEvent) {}
    fn on_cache_miss(&self, _event: &CacheMissEvent) {}
    fn on_cache_evicted(&self, _event: &CacheEvictedEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventHandler;

impl MatchEventHandler for NoopEventHandler {}
