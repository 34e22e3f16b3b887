//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (insertion order of live items)
//! - No rendering, threading or platform dependencies

pub mod apple;
pub mod counters;
pub mod item;
pub mod manager;
pub mod movement;
pub mod result;
pub mod spawn;

pub use apple::{AppleGameManager, ApplePolicy};
pub use counters::{LivesCounter, PointsCounter};
pub use item::{Appearance, Bounds, GameItem, ItemId, ItemKind, ItemStore};
pub use manager::{GameManager, GamePolicy, GameStateObserver};
pub use movement::MovementInfo;
pub use result::{AppleResult, ItemResult, Outcome};
pub use spawn::{ScriptedSpawns, SeededSpawns, SpawnSource};
