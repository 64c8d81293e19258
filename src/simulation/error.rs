//! Error types for the waste sorting simulation
//!
//! One error enum covers the whole run: configuration rejection, thread
//! lifecycle misuse, worker panics surfaced at join time, and report output
//! failures. Everything else in the simulation is infallible by construction
//! (the queue is unbounded and owns both channel ends).

use crate::types::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur while setting up or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The configuration failed validation
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// A join was attempted on a worker with no thread to wait for
    ///
    /// Raised when `join` is called before `start`, and on a second `join`
    /// after the worker's results have already been taken.
    #[error("{name} has no running thread to join (not started, or already joined)")]
    NotRunning {
        /// Name of the worker the join was attempted on
        name: String,
    },

    /// A worker thread panicked during the run
    #[error("{name} panicked during the simulation run")]
    WorkerPanic {
        /// Name of the worker whose thread panicked
        name: String,
    },

    /// Writing the final report to disk failed
    #[error("Failed to write report file: {0}")]
    ReportIo(#[from] std::io::Error),

    /// Serializing the final report failed
    #[error("Failed to serialize report: {0}")]
    ReportSerialization(#[from] serde_json::Error),
}

/// Convenience result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
