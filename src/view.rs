// 🕰️ World Clock View - Catalog in, grouped display records out
// Owns the per-second recomputation loop and the Active/Inactive lifecycle.

use crate::catalog::Catalog;
use crate::clock::{compute_records, DisplayRecord};
use crate::regions::{group_by_region, group_by_timezone, Region};
use crate::search::apply_search;
use crate::ticker::Ticker;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Recomputation period while active
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Lifecycle state of a view.
///
/// `Active`: the ticker is running and the record collection refreshes every
/// second. `Inactive`: the ticker is stopped and the last-computed records
/// stay frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Active,
    Inactive,
}

// ============================================================================
// WORLD CLOCK VIEW
// ============================================================================

/// The one clock engine behind every rendering surface.
///
/// A surface constructs the view with an injected catalog, activates it, and
/// reads grouped snapshots whenever it wants to draw. The view never renders
/// anything itself.
pub struct WorldClockView {
    catalog: Arc<Catalog>,
    records: Arc<RwLock<Vec<DisplayRecord>>>,
    ticker: Option<Ticker>,
    period: Duration,
}

impl WorldClockView {
    /// Create an inactive view over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_period(catalog, TICK_PERIOD)
    }

    /// Same, with a custom tick period. Lets tests drive the lifecycle
    /// without waiting on wall-clock seconds.
    pub fn with_period(catalog: Catalog, period: Duration) -> Self {
        WorldClockView {
            catalog: Arc::new(catalog),
            records: Arc::new(RwLock::new(Vec::new())),
            ticker: None,
            period,
        }
    }

    /// Start the recomputation loop: one tick fires immediately, then one
    /// per period. A second `activate()` on an already-active view is a
    /// no-op; there is never more than one ticker.
    pub fn activate(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let catalog = Arc::clone(&self.catalog);
        let records = Arc::clone(&self.records);

        self.ticker = Some(Ticker::start(self.period, move || {
            // One captured instant for the whole collection, then a
            // wholesale replacement - records are never patched in place.
            let now = Utc::now();
            let fresh = compute_records(&catalog, now);
            *records.write().unwrap() = fresh;
        }));
    }

    /// Stop recomputation and freeze the current records.
    ///
    /// The one timer resource is released exactly once; calling this on an
    /// inactive view does nothing. After it returns, no further record
    /// collection is ever produced by this view.
    pub fn deactivate(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ViewState {
        if self.ticker.is_some() {
            ViewState::Active
        } else {
            ViewState::Inactive
        }
    }

    /// How many ticks have run so far
    pub fn tick_count(&self) -> u64 {
        self.ticker.as_ref().map_or(0, |t| t.fire_count())
    }

    /// The catalog this view renders
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Snapshot of the current record collection, in catalog order
    pub fn records(&self) -> Vec<DisplayRecord> {
        self.records.read().unwrap().clone()
    }

    /// Current records filtered by a search query
    pub fn search(&self, query: &str) -> Vec<DisplayRecord> {
        apply_search(&self.records(), query)
    }

    /// Render-ready output: filter by query, then partition into region
    /// buckets sorted by label. An empty result is the caller's cue to show
    /// its "no matches" state.
    pub fn grouped(&self, query: &str) -> Vec<(Region, Vec<DisplayRecord>)> {
        group_by_region(&self.search(query))
    }

    /// Render-ready output for the states grid: filter by query, then
    /// partition by timezone identifier in first-seen order.
    pub fn grouped_by_timezone(&self, query: &str) -> Vec<(String, Vec<DisplayRecord>)> {
        group_by_timezone(&self.search(query))
    }
}

impl Drop for WorldClockView {
    fn drop(&mut self) {
        self.deactivate();
    }
}

// ============================================================================
// TESTS
// ============================================================================
