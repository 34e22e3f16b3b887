//! Arcade Minigames - fixed-timestep minigame engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (items, per-tick update, game managers)
//! - `config`: Data-driven minigame tuning
//! - `stats`: Per-game statistics accrued on game over
//! - `profile`: Player profile records and rankings
//! - `driver`: Threaded loop driver shared with a renderer

pub mod config;
pub mod driver;
pub mod error;
pub mod profile;
pub mod sim;
pub mod stats;

pub use config::{AppleConfig, SpawnTuning};
pub use error::ConfigError;
pub use stats::{Game, GameKind, Statistics};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz, matches the draw loop cadence)
    pub const SIM_DT: f32 = 1.0 / 30.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen dimensions (portrait phone)
    pub const SCREEN_WIDTH: f32 = 1080.0;
    pub const SCREEN_HEIGHT: f32 = 1920.0;

    /// Item sizes in pixels
    pub const APPLE_SIZE: (f32, f32) = (100.0, 100.0);
    pub const STAR_SIZE: (f32, f32) = (100.0, 100.0);
    pub const BASKET_SIZE: (f32, f32) = (200.0, 100.0);
    /// Gap between the basket bottom and the screen bottom
    pub const BASKET_MARGIN: f32 = 150.0;

    pub const INITIAL_LIVES: u32 = 3;

    /// Spawn roll is uniform in [0, SPAWN_RANGE)
    pub const SPAWN_RANGE: u32 = 200;
    /// Rolls below this spawn a star (~1%)
    pub const STAR_THRESHOLD: u32 = 2;
    /// Rolls below this (and not a star) spawn an apple (~3.5%)
    pub const APPLE_THRESHOLD: u32 = 9;

    /// Fall speeds in pixels/s
    pub const STAR_FALL_SPEED: f32 = 250.0;
    pub const APPLE_FALL_SPEED: f32 = 350.0;
}
