//! Error types

use thiserror::Error;

/// Rejected minigame configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive (got {width}x{height})")]
    NonPositiveScreen { width: f32, height: f32 },

    #[error("{item} size must be positive (got {width}x{height})")]
    NonPositiveSize {
        item: &'static str,
        width: f32,
        height: f32,
    },

    #[error("{item} is wider than the screen ({width} >= {screen_width})")]
    ItemWiderThanScreen {
        item: &'static str,
        width: f32,
        screen_width: f32,
    },

    #[error("spawn range must be non-zero")]
    ZeroSpawnRange,

    #[error("spawn thresholds must satisfy star <= apple <= range (got {star}, {apple}, {range})")]
    ThresholdOrder { star: u32, apple: u32, range: u32 },

    #[error("{item} fall speed must be positive (got {speed})")]
    NonPositiveFallSpeed { item: &'static str, speed: f32 },

    #[error("tick duration must be positive (got {0})")]
    NonPositiveTick(f32),

    #[error("initial lives must be at least 1")]
    ZeroLives,

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
