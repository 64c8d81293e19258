//! Waste Sort Simulator
//!
//! A multi-threaded waste sorting simulation in which concurrent generator
//! threads produce waste items, a shared queue buffers them, and a single
//! collector thread classifies everything into recyclable and
//! non-recyclable statistics.
//!
//! # Overview
//!
//! The simulation models a small sorting facility: several independent
//! producers toss waste onto one conveyor, and one collector at the end
//! sorts it all. The run ends with a report of per-category counts, the
//! recycling rate, and a three-tier sustainability verdict.
//!
//! ## Key Features
//!
//! - **Concurrent Generation**: Any number of producer threads feeding one queue
//! - **Lossless Shutdown**: Stop/drain handshake that never abandons queued items
//! - **Deterministic Runs**: Optional seed for reproducible item sequences
//! - **Classification Statistics**: Per-category counts, rates, and processing time
//! - **Sustainability Verdict**: Automatic assessment of each run's recycling rate
//! - **Configurable Simulation**: Window length, pacing, and thread count via CLI or file
//!
//! ## Quick Start
//!
//! ```rust
//! use waste_sort_simulator::*;
//!
//! // A short, reproducible configuration
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
//! // Run the whole lifecycle and read the report
//! let orchestrator = SimulationOrchestrator::new(config)?;
//! let report = orchestrator.run()?;
//!
//! println!("collected {} items", report.statistics.total_items());
//! assert_eq!(report.items_generated, report.statistics.total_items());
//! # Ok::<(), waste_sort_simulator::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Categories, identifiers, and configuration
//! - [`waste`]: Waste items and the sources that produce them
//! - [`simulation`]: Queue, worker threads, orchestration, and reporting
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │  Generator  │   │  Generator  │   │  Generator  │
//! │  (thread)   │   │  (thread)   │   │  (thread)   │
//! └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!        │ enqueue         │ enqueue        │ enqueue
//!        ▼                 ▼                ▼
//!      ┌──────────────────────────────────────┐
//!      │    CollectionQueue (unbounded FIFO)  │
//!      └──────────────────┬───────────────────┘
//!                         │ dequeue_timeout
//!                         ▼
//!                 ┌───────────────┐
//!                 │   Collector   │
//!                 │   (thread)    │
//!                 └───────┬───────┘
//!                         │ join
//!                         ▼
//!               CollectionStatistics
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod simulation;
pub mod types;
pub mod waste;

// Re-export all public types for convenience

// Core types, identifiers, and configuration
pub use types::{ConfigError, ConfigValidationError, RunId, SimulationConfig, WasteCategory};

// Waste items and sources
pub use waste::{FixedWasteSource, RandomWasteSource, WasteItem, WasteSource};

// Simulation machinery and reporting
pub use simulation::{
    CollectionQueue, CollectionStatistics, LoggingConfig, SimulationError,
    SimulationOrchestrator, SimulationReport, SimulationResult, StopFlag,
    SustainabilityVerdict, WasteCollector, WasteGenerator,
};
