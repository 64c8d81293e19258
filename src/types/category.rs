//! Waste category definitions for the sorting simulator
//!
//! This module contains the category table: every kind of waste the simulation
//! can generate, together with its fixed recyclability classification. The
//! table is immutable; a category's classification is assigned here and never
//! changes at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of simulated waste
///
/// Each category carries a fixed recyclable/non-recyclable classification,
/// exposed through [`WasteCategory::is_recyclable`]. There is deliberately no
/// way to alter a classification after process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WasteCategory {
    /// Paper and cardboard - recyclable
    Paper,
    /// Plastic packaging and containers - recyclable
    Plastic,
    /// Glass bottles and jars - recyclable
    Glass,
    /// Metal cans and scrap - recyclable
    Metal,
    /// Food scraps and garden waste - not recyclable
    Organic,
    /// Mixed residue with no recycling stream - not recyclable
    NonRecyclable,
}

impl WasteCategory {
    /// Every category, in declaration order
    ///
    /// Used for uniform random sampling and for pre-populating per-category
    /// count tables so that absent categories still report a zero count.
    pub const ALL: [WasteCategory; 6] = [
        WasteCategory::Paper,
        WasteCategory::Plastic,
        WasteCategory::Glass,
        WasteCategory::Metal,
        WasteCategory::Organic,
        WasteCategory::NonRecyclable,
    ];

    /// Whether items of this category belong in the recyclable stream
    pub fn is_recyclable(&self) -> bool {
        match self {
            WasteCategory::Paper => true,
            WasteCategory::Plastic => true,
            WasteCategory::Glass => true,
            WasteCategory::Metal => true,
            WasteCategory::Organic => false,
            WasteCategory::NonRecyclable => false,
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasteCategory::Paper => write!(f, "Paper"),
            WasteCategory::Plastic => write!(f, "Plastic"),
            WasteCategory::Glass => write!(f, "Glass"),
            WasteCategory::Metal => write!(f, "Metal"),
            WasteCategory::Organic => write!(f, "Organic"),
            WasteCategory::NonRecyclable => write!(f, "Non-Recyclable"),
        }
    }
}

impl FromStr for WasteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paper" | "cardboard" => Ok(WasteCategory::Paper),
            "plastic" => Ok(WasteCategory::Plastic),
            "glass" => Ok(WasteCategory::Glass),
            "metal" => Ok(WasteCategory::Metal),
            "organic" | "compost" => Ok(WasteCategory::Organic),
            "non-recyclable" | "nonrecyclable" | "non recyclable" | "residual" => {
                Ok(WasteCategory::NonRecyclable)
            }
            _ => Err(format!("Unknown waste category: {}", s)),
        }
    }
}
