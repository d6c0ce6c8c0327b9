//! Periodic tracker sweep with an explicit start/stop lifecycle.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Utc;
use higuard_tracker::DuplicateTracker;

/// Handle to the background prune thread.
///
/// The thread wakes once per period (the dedup window) and prunes stale
/// tracker entries. Dropping the handle stops and joins the thread, so a
/// discarded client leaks no recurring task. The contract is "pruned at
/// least once per window"; the mechanism (thread, timer, external tick) is
/// an implementation detail behind [`DuplicateTracker::prune_older_than`].
#[derive(Debug)]
pub struct PruneSweeper {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl PruneSweeper {
    /// Spawn the sweep thread with the given period in milliseconds.
    pub fn start(tracker: Arc<DuplicateTracker>, period_ms: u64) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let period = Duration::from_millis(period_ms);
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    tracker.prune_older_than(Utc::now().timestamp_millis());
                    tracing::trace!(
                        tracked = tracker.tracked_messages(),
                        "higuard: tracker swept"
                    );
                }
                // Stop requested, or the sender side went away.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Stop the sweep thread and wait for it to exit. Idempotent.
    pub fn stop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PruneSweeper {
    fn drop(&mut self) {
        self.stop();
    }
}
