//! Event payload types emitted by the matrix and result caches.

use crate::types::Combo;

/// A matrix load has started.
#[derive(Debug, Clone)]
pub struct MatrixLoadStartedEvent {
    /// Human-readable name of the source performing the load.
    pub source: String,
}

/// A matrix load finished successfully.
#[derive(Debug, Clone)]
pub struct MatrixLoadCompleteEvent {
    pub rows: usize,
    pub entries: usize,
    pub duration_ms: u64,
}

/// A matrix load failed; the cache reset to Unloaded.
#[derive(Debug, Clone)]
pub struct MatrixLoadFailedEvent {
    pub message: String,
}

/// The loaded grid was missing an entry; a neutral fallback was answered.
#[derive(Debug, Clone)]
pub struct IntegrityGapEvent {
    pub user: Combo,
    pub partner: Combo,
}

/// A curated override replaced a computed result.
#[derive(Debug, Clone)]
pub struct OverrideAppliedEvent {
    pub a: Combo,
    pub b: Combo,
    pub note: Option<String>,
}

/// A result cache lookup hit.
#[derive(Debug, Clone)]
pub struct CacheHitEvent {
    pub user: Combo,
    pub partner: Combo,
}

/// A result cache lookup missed (absent or expired).
#[derive(Debug, Clone)]
pub struct CacheMissEvent {
    pub user: Combo,
    pub partner: Combo,
}

/// Entries were evicted past the cache capacity.
#[derive(Debug, Clone)]
pub struct CacheEvictedEvent {
    pub evicted: usize,
}
