//! Simulation orchestration and control
//!
//! This module contains the producer/collector machinery of the waste
//! sorting simulation: the shared queue, the cooperative stop flag, the
//! worker threads, statistics and reporting, and error handling.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: Builds and runs one complete simulation
//! - **WasteGenerator**: Producer thread feeding the shared queue
//! - **WasteCollector**: Consumer thread classifying into statistics
//! - **CollectionQueue**: Unbounded FIFO queue between the two
//! - **StopFlag**: Cooperative shutdown signal polled by the workers
//! - **CollectionStatistics** / **SimulationReport**: Run results
//! - **SimulationError**: Error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use waste_sort_simulator::simulation::*;
//! use waste_sort_simulator::types::SimulationConfig;
//!
//! // A short, reproducible run
//! let config = SimulationConfig {
//!     generator_count: 2,
//!     simulation_duration_ms: 50,
//!     min_generation_pause_ms: 1,
//!     max_generation_pause_ms: 5,
//!     dequeue_timeout_ms: 10,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let orchestrator = SimulationOrchestrator::new(config).unwrap();
//! let report = orchestrator.run().unwrap();
//!
//! // Everything generated was collected
//! assert_eq!(report.items_generated, report.statistics.total_items());
//! ```

pub mod collector;
pub mod control;
pub mod error;
pub mod generator;
pub mod logging;
pub mod orchestrator;
pub mod queue;
pub mod statistics;

// Re-export all public types for convenience
pub use collector::*;
pub use control::*;
pub use error::*;
pub use generator::*;
pub use logging::*;
pub use orchestrator::*;
pub use queue::*;
pub use statistics::*;
