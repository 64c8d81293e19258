//! Waste generator worker thread
//!
//! Each generator owns a dedicated OS thread that repeatedly draws an item
//! from its [`WasteSource`], enqueues it on the shared collection queue, and
//! pauses before the next draw. Generators stop cooperatively: they poll a
//! stop flag between items and never abandon an item mid-enqueue.

use crate::simulation::control::StopFlag;
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::queue::CollectionQueue;
use crate::waste::{WasteItem, WasteSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, trace};

/// Producer worker that feeds waste items into the shared queue
///
/// The generator is a handle: the actual work happens on a named OS thread
/// spawned by [`start`](WasteGenerator::start). The handle stays usable from
/// the orchestrating thread to request a stop, await completion, and read
/// the number of items produced so far.
///
/// Lifecycle rules:
/// - [`start`](WasteGenerator::start) is a no-op on a generator that was
///   already started.
/// - [`request_stop`](WasteGenerator::request_stop) is idempotent and safe
///   to call before `start`; the thread then exits on its first flag poll
///   without producing anything.
/// - [`join`](WasteGenerator::join) before `start` returns
///   [`SimulationError::NotRunning`]. A second `join` is an `Ok` no-op; the
///   item counter stays readable after it.
#[derive(Debug)]
pub struct WasteGenerator<S: WasteSource + 'static> {
    name: String,
    queue: Arc<CollectionQueue<WasteItem>>,
    source: Option<S>,
    stop_flag: StopFlag,
    items_produced: Arc<AtomicUsize>,
    handle: Option<JoinHandle<()>>,
}

impl<S: WasteSource + 'static> WasteGenerator<S> {
    /// Create a generator that will feed `queue` from `source`
    ///
    /// The name is used for the OS thread and in logs and errors.
    pub fn new(
        name: impl Into<String>,
        queue: Arc<CollectionQueue<WasteItem>>,
        source: S,
    ) -> Self {
        Self {
            name: name.into(),
            queue,
            source: Some(source),
            stop_flag: StopFlag::new(),
            items_produced: Arc::new(AtomicUsize::new(0)),
            handle: None,
        }
    }

    /// Name of this generator
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawn the generator thread
    ///
    /// Calling `start` on a generator that was already started is a no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() || self.source.is_none() {
            debug!(generator = %self.name, "start ignored, generator already started");
            return;
        }

        // Checked above
        let mut source = match self.source.take() {
            Some(source) => source,
            None => return,
        };
        let name = self.name.clone();
        let queue = Arc::clone(&self.queue);
        let stop_flag = self.stop_flag.clone();
        let items_produced = Arc::clone(&self.items_produced);

        let handle = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || {
                debug!(generator = %name, "generator started");

                while stop_flag.should_run() {
                    let item = match source.next_item() {
                        Some(item) => item,
                        None => {
                            debug!(generator = %name, "waste source exhausted");
                            break;
                        }
                    };

                    trace!(generator = %name, category = %item.category(), "generated item");
                    queue.enqueue(item);
                    items_produced.fetch_add(1, Ordering::Relaxed);

                    let pause = source.next_pause();
                    if !pause.is_zero() {
                        thread::sleep(pause);
                    }
                }

                debug!(
                    generator = %name,
                    produced = items_produced.load(Ordering::Relaxed),
                    "generator stopped"
                );
            })
            .expect("failed to spawn generator thread");

        self.handle = Some(handle);
    }

    /// Ask the generator thread to stop after its current item
    ///
    /// Returns immediately; the thread finishes any in-progress pause before
    /// observing the flag. Idempotent, and safe to call before `start`.
    pub fn request_stop(&self) {
        self.stop_flag.request_stop();
    }

    /// Wait for the generator thread to finish
    ///
    /// Blocks until the thread exits, which happens after a stop request or
    /// when the source runs out of items. Without either, this call blocks
    /// for as long as the source keeps producing.
    pub fn join(&mut self) -> SimulationResult<()> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| SimulationError::WorkerPanic {
                name: self.name.clone(),
            }),
            // Never started: the source is still waiting to be consumed
            None if self.source.is_some() => Err(SimulationError::NotRunning {
                name: self.name.clone(),
            }),
            // Already joined
            None => Ok(()),
        }
    }

    /// Number of items successfully enqueued so far
    ///
    /// Readable at any point in the lifecycle; the value is final once
    /// [`join`](WasteGenerator::join) has returned.
    pub fn items_produced(&self) -> usize {
        self.items_produced.load(Ordering::Relaxed)
    }

    /// Whether the generator thread is currently running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<S: WasteSource + 'static> Drop for WasteGenerator<S> {
    fn drop(&mut self) {
        self.stop_flag.request_stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
