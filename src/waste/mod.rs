//! Waste items and their generation sources
//!
//! This module holds the value type that flows through the simulation and the
//! sources that decide which items get generated and how fast.
//!
//! # Overview
//!
//! - **WasteItem**: One immutable unit of simulated waste
//! - **WasteSource**: The injectable seam feeding a generator thread
//! - **RandomWasteSource**: Seeded uniform-random production source
//! - **FixedWasteSource**: Deterministic scripted source for tests
//!
//! # Usage Example
//!
//! ```rust
//! use waste_sort_simulator::types::WasteCategory;
//! use waste_sort_simulator::waste::*;
//! use std::time::Duration;
//!
//! // A reproducible production source
//! let pause_bounds = (Duration::from_millis(200), Duration::from_millis(1000));
//! let mut source = RandomWasteSource::new(pause_bounds, Some(42));
//! let item = source.next_item().expect("random sources never exhaust");
//! assert!(WasteCategory::ALL.contains(&item.category()));
//! ```

pub mod item;
pub mod source;

// Re-export all public types for convenience
pub use item::*;
pub use source::*;
