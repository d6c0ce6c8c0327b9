//! Time-windowed duplicate suppression for error messages.
//!
//! Tracks, per distinct message, the epoch-millisecond timestamps of recent
//! occurrences, and answers whether a new occurrence is a suppressible
//! duplicate. Entry shape:
//! `{ "Error message": [1720964158000, 1720964168000], ... }`
//!
//! Stale timestamps are dropped by [`DuplicateTracker::prune_older_than`],
//! which the owning client drives from a periodic sweep; a message whose
//! history empties is removed entirely so the map never grows without bound.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Outcome of an atomic duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// First occurrence inside the window; the timestamp was recorded.
    Fresh,
    /// Repeat within the window; nothing was recorded.
    Duplicate,
}

/// Thread-safe duplicate tracker using `DashMap` for per-message locking.
///
/// The window is an atomic so a live configuration override can retune it
/// without rebuilding the tracker.
#[derive(Debug)]
pub struct DuplicateTracker {
    entries: DashMap<String, Vec<i64>>,
    max_age_ms: AtomicU64,
}

impl DuplicateTracker {
    /// Create a tracker with the given window in milliseconds.
    ///
    /// The configuration layer guarantees `max_age_ms` is strictly positive;
    /// zero never reaches the tracker.
    pub fn new(max_age_ms: u64) -> Self {
        debug_assert!(max_age_ms > 0);
        Self {
            entries: DashMap::new(),
            max_age_ms: AtomicU64::new(max_age_ms),
        }
    }

    /// Current window in milliseconds.
    pub fn max_age_ms(&self) -> u64 {
        self.max_age_ms.load(Ordering::Relaxed)
    }

    /// Retune the window, e.g. after a config override.
    pub fn set_max_age_ms(&self, max_age_ms: u64) {
        debug_assert!(max_age_ms > 0);
        self.max_age_ms.store(max_age_ms, Ordering::Relaxed);
    }

    /// Pure read: is `message` a duplicate at `now_ms`?
    ///
    /// True iff the message has been seen and its most recent occurrence is
    /// within the window (`now - last <= max_age`, inclusive). A never-seen
    /// message is never a duplicate.
    pub fn is_duplicate(&self, message: &str, now_ms: i64) -> bool {
        self.entries
            .get(message)
            .and_then(|timestamps| timestamps.last().copied())
            .map(|last| self.within_window(last, now_ms))
            .unwrap_or(false)
    }

    /// Append an occurrence timestamp, creating the entry if absent.
    ///
    /// Callers supply timestamps in non-decreasing order; the tracker does
    /// not re-sort.
    pub fn record_occurrence(&self, message: &str, timestamp_ms: i64) {
        self.entries
            .entry(message.to_string())
            .or_default()
            .push(timestamp_ms);
    }

    /// Atomic check-then-record under the entry lock.
    ///
    /// Fresh occurrences are recorded immediately, so two concurrent first
    /// occurrences of the same message cannot both come back `Fresh`.
    /// Duplicates are not recorded: the window stays anchored at the last
    /// dispatch attempt, so a steady stream of one error surfaces roughly
    /// once per window instead of being suppressed forever.
    pub fn observe(&self, message: &str, now_ms: i64) -> Occurrence {
        match self.entries.entry(message.to_string()) {
            Entry::Occupied(mut occupied) => {
                if let Some(&last) = occupied.get().last() {
                    if self.within_window(last, now_ms) {
                        return Occurrence::Duplicate;
                    }
                }
                occupied.get_mut().push(now_ms);
                Occurrence::Fresh
            }
            Entry::Vacant(vacant) => {
                vacant.insert(vec![now_ms]);
                Occurrence::Fresh
            }
        }
    }

    /// Drop timestamps older than the window; remove messages left with an
    /// empty history. This is what bounds memory growth.
    pub fn prune_older_than(&self, now_ms: i64) {
        let max_age = self.max_age_ms() as i64;
        self.entries.retain(|_, timestamps| {
            timestamps.retain(|&ts| now_ms.saturating_sub(ts) <= max_age);
            !timestamps.is_empty()
        });
    }

    /// Number of distinct messages currently tracked.
    pub fn tracked_messages(&self) -> usize {
        self.entries.len()
    }

    /// Number of recorded occurrences for one message.
    pub fn occurrence_count(&self, message: &str) -> usize {
        self.entries
            .get(message)
            .map(|timestamps| timestamps.len())
            .unwrap_or(0)
    }

    /// Most recent recorded occurrence for one message.
    pub fn last_occurrence(&self, message: &str) -> Option<i64> {
        self.entries
            .get(message)
            .and_then(|timestamps| timestamps.last().copied())
    }

    fn within_window(&self, last_ms: i64, now_ms: i64) -> bool {
        now_ms.saturating_sub(last_ms) <= self.max_age_ms() as i64
    }
}
