//! Item update outcomes

use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// What happened to an item during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    None,
    /// Caught by the basket
    Collected,
    /// Fell past the bottom of the screen (costs a life)
    Dropped,
    /// Left play without consequence
    Expired,
}

/// Apple game facets of a result
///
/// The facets are independent; one tick may report several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppleResult {
    pub apple_collected: bool,
    pub apple_dropped: bool,
    pub star_collected: bool,
}

impl AppleResult {
    pub fn apple_collected() -> Self {
        Self {
            apple_collected: true,
            ..Self::default()
        }
    }

    pub fn apple_dropped() -> Self {
        Self {
            apple_dropped: true,
            ..Self::default()
        }
    }

    pub fn star_collected() -> Self {
        Self {
            star_collected: true,
            ..Self::default()
        }
    }
}

/// Result of one item's update, produced fresh each tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemResult {
    pub outcome: Outcome,
    /// Items to purge once every item has been updated
    pub old_items: Vec<ItemId>,
    /// Score/life facets (apple game items only)
    pub apple: Option<AppleResult>,
}

impl ItemResult {
    /// Nothing happened
    pub fn none() -> Self {
        Self::default()
    }

    /// The item is done and must be removed this tick
    pub fn retire(id: ItemId, outcome: Outcome, apple: Option<AppleResult>) -> Self {
        Self {
            outcome,
            old_items: vec![id],
            apple,
        }
    }
}
