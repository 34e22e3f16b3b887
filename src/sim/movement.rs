//! Per-tick context shared by every item update

use serde::{Deserialize, Serialize};

use super::item::Bounds;

/// Read-only snapshot built once per tick
///
/// Every item update in a tick sees the same snapshot, so basket moves that
/// arrive mid-tick only become visible on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementInfo {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Catcher bounds for this tick (`Bounds::NONE` when there is no catcher)
    pub basket: Bounds,
    /// Seconds advanced by this tick
    pub dt: f32,
    /// Seconds simulated since the game started, including this tick
    pub elapsed: f32,
    /// Counter values as of the start of the tick (for HUD items)
    pub points: u32,
    pub lives: u32,
}
