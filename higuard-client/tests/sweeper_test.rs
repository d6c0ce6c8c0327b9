//! Wall-clock tests for the periodic prune sweep. Margins are generous to
//! stay stable on slow CI machines.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use higuard_client::PruneSweeper;
use higuard_tracker::DuplicateTracker;

#[test]
fn sweeper_prunes_stale_entries_within_a_few_periods() {
    let tracker = Arc::new(DuplicateTracker::new(50));
    tracker.record_occurrence("Foo", Utc::now().timestamp_millis());

    let mut sweeper = PruneSweeper::start(Arc::clone(&tracker), 50);
    thread::sleep(Duration::from_millis(400));
    sweeper.stop();

    assert_eq!(tracker.tracked_messages(), 0, "stale entry swept");
}

#[test]
fn stopped_sweeper_leaves_entries_alone() {
    let tracker = Arc::new(DuplicateTracker::new(50));
    let mut sweeper = PruneSweeper::start(Arc::clone(&tracker), 50);
    sweeper.stop();

    tracker.record_occurrence("Foo", 0);
    thread::sleep(Duration::from_millis(150));
    assert_eq!(tracker.tracked_messages(), 1, "no thread left running");
}

#[test]
fn drop_stops_the_thread_without_hanging() {
    let tracker = Arc::new(DuplicateTracker::new(10_000));
    let sweeper = PruneSweeper::start(Arc::clone(&tracker), 10_000);
    // Dropping must interrupt the 10s sleep promptly rather than join on it.
    drop(sweeper);
}

#[test]
fn stop_is_idempotent() {
    let tracker = Arc::new(DuplicateTracker::new(50));
    let mut sweeper = PruneSweeper::start(tracker, 50);
    sweeper.stop();
    sweeper.stop();
}
