// ⏱️ Ticker - Repeating task with a single owned cancellation handle
// Fires its callback once immediately, then on a fixed period, until stopped.
// Stopping releases the timer resource exactly once; dropping a running
// ticker stops it too.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Periodic background task.
///
/// The callback runs on a dedicated thread. `stop()` joins that thread, so
/// once it returns no further invocation can happen - there is no in-flight
/// tick after a stop.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    fired: Arc<AtomicU64>,
}

impl Ticker {
    /// Start a repeating task: one immediate invocation, then one per period.
    pub fn start<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);

        let handle = std::thread::spawn(move || loop {
            callback();
            counter.fetch_add(1, Ordering::SeqCst);

            match stop_rx.recv_timeout(period) {
                // Stop requested, or the handle side is gone entirely
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        });

        Ticker {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
            fired,
        }
    }

    /// Stop the task and wait for its thread to finish.
    ///
    /// Idempotent: the first call tears the timer down, later calls are
    /// no-ops.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }

    /// True until `stop()` has been called
    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    /// How many times the callback has fired
    pub fn fire_count(&self) -> u64 {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

// ============================================================================
// TESTS
// ============================================================================
