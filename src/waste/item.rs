//! Waste item value type
//!
//! This module contains the immutable item that flows from generators through
//! the collection queue into the collector's result lists.

use crate::types::WasteCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of simulated waste
///
/// Immutable after construction: a generator creates the item, the collection
/// queue carries it, and the collector files it into a result list. Nothing
/// mutates it along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WasteItem {
    category: WasteCategory,
}

impl WasteItem {
    /// Create a new waste item of the given category
    pub fn new(category: WasteCategory) -> Self {
        Self { category }
    }

    /// The item's waste category
    pub fn category(&self) -> WasteCategory {
        self.category
    }

    /// Whether this item belongs in the recyclable stream
    pub fn is_recyclable(&self) -> bool {
        self.category.is_recyclable()
    }
}

impl fmt::Display for WasteItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Waste item: {}", self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_construction() {
        let item = WasteItem::new(WasteCategory::Glass);
        assert_eq!(item.category(), WasteCategory::Glass);
    }

    #[test]
    fn test_item_classification_follows_category() {
        assert!(WasteItem::new(WasteCategory::Paper).is_recyclable());
        assert!(WasteItem::new(WasteCategory::Metal).is_recyclable());
        assert!(!WasteItem::new(WasteCategory::Organic).is_recyclable());
        assert!(!WasteItem::new(WasteCategory::NonRecyclable).is_recyclable());
    }

    #[test]
    fn test_item_display() {
        let item = WasteItem::new(WasteCategory::Paper);
        assert_eq!(format!("{}", item), "Waste item: Paper");

        let item = WasteItem::new(WasteCategory::NonRecyclable);
        assert_eq!(format!("{}", item), "Waste item: Non-Recyclable");
    }

    #[test]
    fn test_item_serialization() {
        let item = WasteItem::new(WasteCategory::Organic);
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: WasteItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
