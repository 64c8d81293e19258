//! Waste generation sources
//!
//! This module contains the seam between a generator thread's loop and the
//! randomness it consumes. Production runs use a seeded RNG source; tests can
//! supply a deterministic script without touching the generator itself.

use crate::types::WasteCategory;
use crate::waste::WasteItem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;

/// Supplies the items a generator enqueues and the pauses between them
///
/// Returning `None` from [`next_item`](WasteSource::next_item) means the
/// source is exhausted; the owning generator treats that exactly like a stop
/// request and winds down. Production sources never exhaust.
pub trait WasteSource: Send {
    /// Produce the next item, or `None` when the source has nothing left
    fn next_item(&mut self) -> Option<WasteItem>;

    /// How long the generator should pause before producing again
    fn next_pause(&mut self) -> Duration;
}

/// Production source: uniform random category, uniform random pause
///
/// Categories are drawn uniformly from [`WasteCategory::ALL`]; pauses are
/// drawn uniformly from the configured `[min, max]` bounds. With a seed the
/// sequence is fully reproducible.
#[derive(Debug)]
pub struct RandomWasteSource {
    rng: StdRng,
    min_pause_ms: u64,
    max_pause_ms: u64,
}

impl RandomWasteSource {
    /// Create a source with the given pause bounds and optional seed
    ///
    /// The bounds are expected to be validated upstream (`min <= max`, see
    /// `SimulationConfig::validate`).
    pub fn new(pause_range: (Duration, Duration), seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (min_pause, max_pause) = pause_range;

        Self {
            rng,
            min_pause_ms: min_pause.as_millis() as u64,
            max_pause_ms: max_pause.as_millis() as u64,
        }
    }
}

impl WasteSource for RandomWasteSource {
    fn next_item(&mut self) -> Option<WasteItem> {
        let index = self.rng.gen_range(0..WasteCategory::ALL.len());
        Some(WasteItem::new(WasteCategory::ALL[index]))
    }

    fn next_pause(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.min_pause_ms..=self.max_pause_ms))
    }
}

/// Deterministic source replaying a fixed script with no pauses
///
/// Yields the scripted items in order and then exhausts, which stops the
/// owning generator on its own. Drives the deterministic scenario tests.
#[derive(Debug, Clone)]
pub struct FixedWasteSource {
    items: VecDeque<WasteItem>,
}

impl FixedWasteSource {
    /// Create a source that yields items of the given categories in order
    pub fn from_categories(categories: &[WasteCategory]) -> Self {
        Self {
            items: categories.iter().map(|&category| WasteItem::new(category)).collect(),
        }
    }

    /// Number of scripted items not yet handed out
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

impl WasteSource for FixedWasteSource {
    fn next_item(&mut self) -> Option<WasteItem> {
        self.items.pop_front()
    }

    fn next_pause(&mut self) -> Duration {
        Duration::ZERO
    }
}
