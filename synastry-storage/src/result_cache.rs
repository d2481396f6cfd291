//! The bounded, TTL'd client result cache.

use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;

use synastry_core::config::CacheConfig;
use synastry_core::errors::StorageError;
use synastry_core::events::{
    CacheEvictedEvent, CacheHitEvent, CacheMissEvent, MatchEventHandler, NoopEventHandler,
};
use synastry_core::types::{Combo, CompatibilityResult};

use crate::connection::open_cache_db;
use crate::queries::match_cache::{self, CacheRow};

/// One cached pair result.
///
/// Keys are directional: `(user, partner)` and `(partner, user)` are
/// distinct entries. The upstream matrix is symmetric, but the client
/// cache has always keyed by viewer; preserved as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMatch {
    pub user: Combo,
    pub partner: Combo,
    pub result: CompatibilityResult,
    /// Unix seconds at insertion.
    pub cached_at: u64,
}

/// Bounded, TTL'd, most-recent-first cache of pair results.
///
/// `set` removes any prior entry for the same directional key, inserts
/// at the front, then truncates to capacity; a FIFO/LRU hybrid where
/// insertion order, not access order, decides eviction.
///
/// With a database attached, every mutation writes through; storage
/// failures are logged and swallowed so a lookup can never fail on a
/// persistence problem.
pub struct ResultCache {
    entries: Vec<CachedMatch>,
    capacity: usize,
    ttl_seconds: u64,
    conn: Option<Connection>,
    events: Arc<dyn MatchEventHandler>,
}

impl ResultCache {
    /// In-memory cache with no persistence.
    pub fn in_memory(config: &CacheConfig) -> Self {
        Self {
            entries: Vec::new(),
            capacity: config.effective_capacity(),
            ttl_seconds: config.effective_ttl_seconds(),
            conn: None,
            events: Arc::new(NoopEventHandler),
        }
    }

    /// Cache persisted at `path`. If the database cannot be opened the
    /// cache degrades to in-memory and keeps working.
    pub fn open(path: &Path, config: &CacheConfig) -> Self {
        let mut cache = Self::in_memory(config);
        match open_cache_db(path) {
            Ok(conn) => {
                cache.conn = Some(conn);
                cache.hydrate();
            }
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(),
                    "cache db unavailable; continuing without persistence");
            }
        }
        cache
    }

    /// Cache persisted wherever `config.db_path` points, or in-memory
    /// when unset.
    pub fn from_config(config: &CacheConfig) -> Self {
        match &config.db_path {
            Some(path) => Self::open(Path::new(path), config),
            None => Self::in_memory(config),
        }
    }

    pub fn with_event_handler(mut self, events: Arc<dyn MatchEventHandler>) -> Self {
        self.events = events;
        self
    }

    /// Reload entries from the database, newest first.
    fn hydrate(&mut self) {
        let Some(conn) = &self.conn else { return };
        let rows = match match_cache::load_recent(conn, self.capacity) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(error = %err, "failed to hydrate result cache");
                return;
            }
        };
        self.entries = rows
            .into_iter()
            .filter_map(|row| match parse_row(&row) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(error = %err, user = %row.user_combo,
                        partner = %row.partner_combo, "skipping corrupt cache row");
                    None
                }
            })
            .collect();
    }

    /// Cached result for a directional key pair, if present and younger
    /// than the TTL.
    pub fn get(&self, user: Combo, partner: Combo) -> Option<CompatibilityResult> {
        self.get_at(user, partner, unix_now())
    }

    /// TTL check against an explicit clock, for deterministic tests.
    pub fn get_at(&self, user: Combo, partner: Combo, now: u64) -> Option<CompatibilityResult> {
        let hit = self.entries.iter().find(|entry| {
            entry.user == user
                && entry.partner == partner
                && now.saturating_sub(entry.cached_at) < self.ttl_seconds
        });
        match hit {
            Some(entry) => {
                self.events.on_cache_hit(&CacheHitEvent { user, partner });
                Some(entry.result.clone())
            }
            None => {
                self.events.on_cache_miss(&CacheMissEvent { user, partner });
                None
            }
        }
    }

    /// Insert a result at the front, evicting past capacity.
    pub fn set(&mut self, user: Combo, partner: Combo, result: CompatibilityResult) {
        self.set_at(user, partner, result, unix_now());
    }

    /// Insert with an explicit timestamp, for deterministic tests.
    pub fn set_at(
        &mut self,
        user: Combo,
        partner: Combo,
        result: CompatibilityResult,
        now: u64,
    ) {
        // Drop any prior entry for the same directional key.
        self.entries
            .retain(|entry| !(entry.user == user && entry.partner == partner));

        self.entries.insert(
            0,
            CachedMatch {
                user,
                partner,
                result,
                cached_at: now,
            },
        );

        let evicted = self.entries.len().saturating_sub(self.capacity);
        if evicted > 0 {
            self.entries.truncate(self.capacity);
            self.events.on_cache_evicted(&CacheEvictedEvent { evicted });
        }

        if let Err(err) = self.persist_front(evicted) {
            tracing::warn!(error = %err, "cache write-through failed; entry kept in memory");
        }
    }

    /// Drop every entry older than the TTL.
    pub fn purge_expired(&mut self) {
        self.purge_expired_at(unix_now());
    }

    pub fn purge_expired_at(&mut self, now: u64) {
        let ttl = self.ttl_seconds;
        self.entries
            .retain(|entry| now.saturating_sub(entry.cached_at) < ttl);
        if let Some(conn) = &self.conn {
            let cutoff = now.saturating_sub(ttl);
            if let Err(err) = match_cache::purge_older_than(conn, cutoff) {
                tracing::warn!(error = %err, "cache purge write-through failed");
            }
        }
    }

    /// Remove everything, memory and database.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(conn) = &self.conn {
            if let Err(err) = match_cache::clear(conn) {
                tracing::warn!(error = %err, "cache clear write-through failed");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether mutations are being written through to a database.
    pub fn is_persistent(&self) -> bool {
        self.conn.is_some()
    }

    /// Snapshot of the entries, newest first. Mainly for tests/tooling.
    pub fn entries(&self) -> &[CachedMatch] {
        &self.entries
    }

    fn persist_front(&self, evicted: usize) -> Result<(), StorageError> {
        let Some(conn) = &self.conn else {
            return Ok(());
        };
        let Some(front) = self.entries.first() else {
            return Ok(());
        };
        match_cache::upsert_entry(conn, &serialize_entry(front)?)?;
        if evicted > 0 {
            match_cache::trim_to(conn, self.capacity)?;
        }
        Ok(())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn serialize_entry(entry: &CachedMatch) -> Result<CacheRow, StorageError> {
    let result_json =
        serde_json::to_string(&entry.result).map_err(|e| StorageError::CorruptEntry {
            message: e.to_string(),
        })?;
    Ok(CacheRow {
        user_combo: entry.user.key(),
        partner_combo: entry.partner.key(),
        result_json,
        cached_at: entry.cached_at,
    })
}

fn parse_row(row: &CacheRow) -> Result<CachedMatch, StorageError> {
    let user: Combo = row
        .user_combo
        .parse()
        .map_err(|e: synastry_core::errors::ValidationError| StorageError::CorruptEntry {
            message: e.to_string(),
        })?;
    let partner: Combo =
        row.partner_combo
            .parse()
            .map_err(|e: synastry_core::errors::ValidationError| StorageError::CorruptEntry {
                message: e.to_string(),
            })?;
    let result: CompatibilityResult =
        serde_json::from_str(&row.result_json).map_err(|e| StorageError::CorruptEntry {
            message: e.to_string(),
        })?;
    Ok(CachedMatch {
        user,
        partner,
        result,
        cached_at: row.cached_at,
    })
}
