//! Lazy, memoizing cache over a matrix source.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Instant;

use synastry_core::events::{
    IntegrityGapEvent, MatchEventHandler, MatrixLoadCompleteEvent, MatrixLoadFailedEvent,
    MatrixLoadStartedEvent, NoopEventHandler,
};
use synastry_core::errors::LoadError;
use synastry_core::types::{Combo, MatchRecord};

use super::data::MatrixData;
use super::source::MatrixSource;

/// Load lifecycle of the grid.
enum LoadState {
    Unloaded,
    Loading,
    Loaded(Arc<MatrixData>),
}

/// Lazily loaded, memoized view over the full match grid.
///
/// Owns an explicit Unloaded/Loading/Loaded state machine. Concurrent
/// callers coalesce onto the single in-flight load: one caller performs
/// the load while the rest wait on a condvar, so the source is invoked
/// exactly once per attempt. A failed load resets the state to Unloaded
/// and the next caller retries.
///
/// Construct one at the composition root and inject it wherever lookups
/// happen; separate instances are fully isolated, which is what makes
/// the lifecycle testable.
pub struct MatrixCache {
    state: Mutex<LoadState>,
    loaded: Condvar,
    source: Box<dyn MatrixSource>,
    events: Arc<dyn MatchEventHandler>,
}

impl MatrixCache {
    pub fn new(source: Box<dyn MatrixSource>) -> Self {
        Self {
            state: Mutex::new(LoadState::Unloaded),
            loaded: Condvar::new(),
            source,
            events: Arc::new(NoopEventHandler),
        }
    }

    pub fn with_event_handler(mut self, events: Arc<dyn MatchEventHandler>) -> Self {
        self.events = events;
        self
    }

    /// Whether the grid is currently loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(
            *self.state.lock().unwrap_or_else(PoisonError::into_inner),
            LoadState::Loaded(_)
        )
    }

    /// Drop the loaded grid, returning to Unloaded. Test/tooling hook.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, LoadState::Loaded(_)) {
            *state = LoadState::Unloaded;
        }
    }

    /// Ensure the grid is loaded and return a handle to it.
    ///
    /// This is the only blocking operation in the subsystem. Callers that
    /// find a load already in flight wait for it; if that load fails they
    /// get [`LoadError::CoalescedLoadFailed`] rather than starting a
    /// competing load, and the state is left Unloaded for the next call.
    pub fn ensure_loaded(&self) -> Result<Arc<MatrixData>, LoadError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut waited = false;
        loop {
            match &*state {
                LoadState::Loaded(data) => return Ok(Arc::clone(data)),
                LoadState::Loading => {
                    state = self
                        .loaded
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                    waited = true;
                }
                LoadState::Unloaded if waited => return Err(LoadError::CoalescedLoadFailed),
                LoadState::Unloaded => break,
            }
        }

        // This caller owns the load attempt.
        *state = LoadState::Loading;
        drop(state);

        self.events.on_matrix_load_started(&MatrixLoadStartedEvent {
            source: self.source.name().to_string(),
        });
        let started = Instant::now();
        let result = self.source.load();

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok(data) => {
                let data = Arc::new(data);
                tracing::info!(
                    rows = data.row_count(),
                    entries = data.entry_count(),
                    "match matrix loaded"
                );
                self.events
                    .on_matrix_load_complete(&MatrixLoadCompleteEvent {
                        rows: data.row_count(),
                        entries: data.entry_count(),
                        duration_ms: started.elapsed().as_millis() as u64,
                    });
                *state = LoadState::Loaded(Arc::clone(&data));
                self.loaded.notify_all();
                Ok(data)
            }
            Err(err) => {
                tracing::warn!(error = %err, "match matrix load failed; resetting to unloaded");
                self.events.on_matrix_load_failed(&MatrixLoadFailedEvent {
                    message: err.to_string(),
                });
                *state = LoadState::Unloaded;
                self.loaded.notify_all();
                Err(err)
            }
        }
    }

    /// Precomputed record for one pair.
    ///
    /// A gap in the loaded grid is a data-generation defect: it is logged
    /// and answered with the neutral fallback record; this method never
    /// fails once the grid is loaded, because the product is advisory.
    pub fn get(&self, user: Combo, partner: Combo) -> Result<MatchRecord, LoadError> {
        let data = self.ensure_loaded()?;
        match data.get(user, partner) {
            Some(record) => Ok(record.clone()),
            None => {
                tracing::warn!(%user, %partner, "matrix gap; answering neutral fallback");
                self.events
                    .on_integrity_gap(&IntegrityGapEvent { user, partner });
                Ok(MatchRecord::neutral_fallback())
            }
        }
    }

    /// Every partner for `user`, best first.
    ///
    /// Sorted descending by overall score with a stable tie-break on the
    /// partner enumeration order; the ranking is user-visible and must
    /// be identical across runs.
    pub fn all_matches(&self, user: Combo) -> Result<Vec<(Combo, MatchRecord)>, LoadError> {
        let data = self.ensure_loaded()?;
        let mut matches: Vec<(Combo, MatchRecord)> = data
            .row(user)
            .into_iter()
            .map(|(combo, record)| (combo, record.clone()))
            .collect();
        // Vec::sort_by is stable, so equal scores keep enumeration order.
        matches.sort_by(|a, b| b.1.overall.cmp(&a.1.overall));
        Ok(matches)
    }

    /// The `limit` best partners for `user`.
    pub fn top_matches(
        &self,
        user: Combo,
        limit: usize,
    ) -> Result<Vec<(Combo, MatchRecord)>, LoadError> {
        let mut matches = self.all_matches(user)?;
        matches.truncate(limit);
        Ok(matches)
    }
}
