//! Core types and identifiers for the waste sorting simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! The types module provides the foundational data types for the simulation:
//!
//! - **Category**: The immutable waste category table with recyclability flags
//! - **Identifiers**: UUID-based run identifier for logs and reports
//! - **Configuration**: Simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use waste_sort_simulator::types::*;
//!
//! // Identify a run
//! let run_id = RunId::new();
//!
//! // The category table is fixed at definition time
//! assert!(WasteCategory::Glass.is_recyclable());
//! assert!(!WasteCategory::Organic.is_recyclable());
//!
//! // Configure a short simulation
//! let config = SimulationConfig {
//!     generator_count: 2,
//!     simulation_duration_ms: 500,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod category;
pub mod config;
pub mod identifiers;

// Re-export all public types for convenience
pub use category::*;
pub use config::*;
pub use identifiers::*;
