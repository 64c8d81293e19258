//! Waste collector worker thread
//!
//! The collector is the single consumer of the shared queue. It dequeues
//! with a bounded timeout so it can notice stop requests, classifies each
//! item into the run's statistics, and keeps draining after a stop until
//! the queue is empty.

use crate::simulation::control::StopFlag;
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::queue::CollectionQueue;
use crate::simulation::statistics::CollectionStatistics;
use crate::waste::WasteItem;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace};

/// Thread name for the collector, used in logs and errors
const COLLECTOR_THREAD_NAME: &str = "waste-collector";

/// Consumer worker that drains the shared queue into run statistics
///
/// The collector thread owns its [`CollectionStatistics`] exclusively while
/// running; no other thread can observe the tally until
/// [`join`](WasteCollector::join) transfers ownership of the finished
/// statistics back to the caller. That hand-off is what makes the final
/// counts consistent without any locking around them.
///
/// Lifecycle rules:
/// - [`start`](WasteCollector::start) is a no-op on a collector that was
///   already started.
/// - [`request_stop`](WasteCollector::request_stop) is idempotent and safe
///   to call before `start`. A collector started after a stop request still
///   drains whatever is already queued before exiting.
/// - [`join`](WasteCollector::join) before `start` and a second `join`
///   both return [`SimulationError::NotRunning`]; the statistics can only
///   be taken once.
#[derive(Debug)]
pub struct WasteCollector {
    queue: Arc<CollectionQueue<WasteItem>>,
    dequeue_timeout: Duration,
    stop_flag: StopFlag,
    handle: Option<JoinHandle<CollectionStatistics>>,
    started: bool,
}

impl WasteCollector {
    /// Create a collector reading from `queue`
    ///
    /// `dequeue_timeout` bounds each wait on the queue; it is the longest
    /// the collector can take to notice a stop request while idle.
    pub fn new(queue: Arc<CollectionQueue<WasteItem>>, dequeue_timeout: Duration) -> Self {
        Self {
            queue,
            dequeue_timeout,
            stop_flag: StopFlag::new(),
            handle: None,
            started: false,
        }
    }

    /// Spawn the collector thread
    ///
    /// Calling `start` on a collector that was already started is a no-op.
    pub fn start(&mut self) {
        if self.started {
            debug!("start ignored, collector already started");
            return;
        }
        self.started = true;

        let queue = Arc::clone(&self.queue);
        let stop_flag = self.stop_flag.clone();
        let dequeue_timeout = self.dequeue_timeout;

        let handle = thread::Builder::new()
            .name(COLLECTOR_THREAD_NAME.to_string())
            .spawn(move || {
                debug!("collector started");
                let mut statistics = CollectionStatistics::new();

                // Keep consuming while running, then drain whatever is
                // still queued once a stop has been requested. The empty
                // check is only decisive because generators are joined
                // before the collector is stopped.
                while stop_flag.should_run() || !queue.is_empty() {
                    match queue.dequeue_timeout(dequeue_timeout) {
                        Some(item) => {
                            trace!(category = %item.category(), "collected item");
                            statistics.record(item);
                        }
                        // Timed out with nothing queued; re-check the flag
                        None => continue,
                    }
                }

                debug!(items = statistics.total_items(), "collector stopped");
                statistics
            })
            .expect("failed to spawn collector thread");

        self.handle = Some(handle);
    }

    /// Ask the collector to stop once the queue is drained
    ///
    /// Returns immediately. Idempotent, and safe to call before `start`.
    pub fn request_stop(&self) {
        self.stop_flag.request_stop();
    }

    /// Wait for the collector to finish and take the final statistics
    ///
    /// Blocks until the thread has drained the queue and exited. Without a
    /// prior [`request_stop`](WasteCollector::request_stop) this blocks
    /// until someone else requests one. The statistics move to the caller;
    /// a second `join` returns [`SimulationError::NotRunning`].
    pub fn join(&mut self) -> SimulationResult<CollectionStatistics> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| SimulationError::WorkerPanic {
                name: COLLECTOR_THREAD_NAME.to_string(),
            }),
            None => Err(SimulationError::NotRunning {
                name: COLLECTOR_THREAD_NAME.to_string(),
            }),
        }
    }

    /// Whether the collector thread is currently running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for WasteCollector {
    fn drop(&mut self) {
        self.stop_flag.request_stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
