//! Shared collection queue connecting generators to the collector
//!
//! This module contains the one piece of shared mutable state in the
//! simulation: an unbounded FIFO channel that every generator thread writes
//! into and the single collector thread drains.

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Unbounded FIFO queue shared by the generator threads and the collector
///
/// Wraps an unbounded channel and owns both of its ends, so
/// [`enqueue`](CollectionQueue::enqueue) can never observe a disconnected
/// channel: it never blocks and never fails. Items enqueued by one thread are
/// dequeued in that thread's enqueue order; no order is promised across
/// different enqueueing threads.
///
/// Shared between threads behind an [`Arc`](std::sync::Arc).
#[derive(Debug)]
pub struct CollectionQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> CollectionQueue<T> {
    /// Create a new empty queue
    pub fn new() -> Self {
        let (sender, receiver) = channel::unbounded();
        Self { sender, receiver }
    }

    /// Add an item to the back of the queue
    pub fn enqueue(&self, item: T) {
        // The queue owns its receiving end, so the channel can never be
        // disconnected from under the sender.
        let _ = self.sender.send(item);
    }

    /// Wait up to `timeout` for an item from the front of the queue
    ///
    /// Returns `None` when the bound elapses with nothing queued. The bound
    /// keeps the collector responsive to stop requests; it never waits
    /// indefinitely.
    pub fn dequeue_timeout(&self, timeout: Duration) -> Option<T> {
        match self.receiver.recv_timeout(timeout) {
            Ok(item) => Some(item),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Point-in-time emptiness check
    ///
    /// The answer can go stale immediately under concurrent enqueues. It is
    /// only meaningful for drain termination, where the orchestrator
    /// guarantees every generator has already been joined.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Number of items currently waiting in the queue
    pub fn len(&self) -> usize {
        self.receiver.len()
    }
}

impl<T> Default for CollectionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
