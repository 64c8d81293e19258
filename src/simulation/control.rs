//! Cooperative stop signalling for the simulation threads
//!
//! Generators and the collector never get interrupted mid-item. Each thread
//! polls a shared flag between units of work and winds down on its own once
//! a stop has been requested.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable stop signal polled by the generator and collector loops
///
/// Cheap to clone: all clones share one atomic flag. Requesting a stop is a
/// one-way transition; there is no way to resume a flag once it has been
/// tripped.
///
/// The flag uses relaxed atomic ordering. It is a latch polled in a loop,
/// and the thread join that follows it orders every data hand-off.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    stopped: Arc<AtomicBool>,
}

impl StopFlag {
    /// Create a new flag in the running state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the owning thread to stop
    ///
    /// Idempotent: requesting a stop that was already requested has no
    /// further effect. Safe to call before the owning thread exists; the
    /// thread then exits on its first poll.
    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Whether the owning thread should keep doing work
    pub fn should_run(&self) -> bool {
        !self.stopped.load(Ordering::Relaxed)
    }

    /// Whether a stop has been requested
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}
