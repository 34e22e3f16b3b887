//! Minigame tuning and screen layout
//!
//! Supplied once at construction, never derived from game state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Probabilistic spawn policy parameters
///
/// Each tick draws a roll in `[0, range)`. Rolls below `star_threshold`
/// spawn a star, rolls below `apple_threshold` spawn an apple, the rest
/// spawn nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub range: u32,
    pub star_threshold: u32,
    pub apple_threshold: u32,
    /// Downward speed of new stars (pixels/s)
    pub star_fall_speed: f32,
    /// Downward speed of new apples (pixels/s)
    pub apple_fall_speed: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            range: SPAWN_RANGE,
            star_threshold: STAR_THRESHOLD,
            apple_threshold: APPLE_THRESHOLD,
            star_fall_speed: STAR_FALL_SPEED,
            apple_fall_speed: APPLE_FALL_SPEED,
        }
    }
}

/// Apple minigame configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppleConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Item sizes (width, height) ===
    pub apple_size: Vec2,
    pub star_size: Vec2,
    pub basket_size: Vec2,

    // === Rules ===
    pub initial_lives: u32,
    /// Simulated seconds per tick
    pub tick_seconds: f32,
    pub spawn: SpawnTuning,
}

impl Default for AppleConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            apple_size: Vec2::new(APPLE_SIZE.0, APPLE_SIZE.1),
            star_size: Vec2::new(STAR_SIZE.0, STAR_SIZE.1),
            basket_size: Vec2::new(BASKET_SIZE.0, BASKET_SIZE.1),

            initial_lives: INITIAL_LIVES,
            tick_seconds: SIM_DT,
            spawn: SpawnTuning::default(),
        }
    }
}

impl AppleConfig {
    /// Default tuning on a screen of the given size
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every dimension and threshold before the first tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::NonPositiveScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        for (item, size) in [
            ("apple", self.apple_size),
            ("star", self.star_size),
            ("basket", self.basket_size),
        ] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::NonPositiveSize {
                    item,
                    width: size.x,
                    height: size.y,
                });
            }
        }

        // Falling items need at least one whole pixel of horizontal play
        for (item, width) in [("apple", self.apple_size.x), ("star", self.star_size.x)] {
            if width + 1.0 > self.screen_width {
                return Err(ConfigError::ItemWiderThanScreen {
                    item,
                    width,
                    screen_width: self.screen_width,
                });
            }
        }
        if self.basket_size.x > self.screen_width {
            return Err(ConfigError::ItemWiderThanScreen {
                item: "basket",
                width: self.basket_size.x,
                screen_width: self.screen_width,
            });
        }

        let spawn = &self.spawn;
        if spawn.range == 0 {
            return Err(ConfigError::ZeroSpawnRange);
        }
        if spawn.star_threshold > spawn.apple_threshold || spawn.apple_threshold > spawn.range {
            return Err(ConfigError::ThresholdOrder {
                star: spawn.star_threshold,
                apple: spawn.apple_threshold,
                range: spawn.range,
            });
        }
        for (item, speed) in [
            ("star", spawn.star_fall_speed),
            ("apple", spawn.apple_fall_speed),
        ] {
            if !(speed > 0.0) {
                return Err(ConfigError::NonPositiveFallSpeed { item, speed });
            }
        }

        if !(self.tick_seconds > 0.0) {
            return Err(ConfigError::NonPositiveTick(self.tick_seconds));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(())
    }

    /// Exclusive upper bound for spawn x-coordinates
    ///
    /// Uses the wider of the two falling items so either kind fits on screen.
    pub fn spawn_width(&self) -> u32 {
        let widest = self.apple_size.x.max(self.star_size.x);
        (self.screen_width - widest).floor().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn.range, 200);
        assert_eq!(config.spawn.star_threshold, 2);
        assert_eq!(config.spawn.apple_threshold, 9);
        assert_eq!(config.spawn.star_fall_speed, 250.0);
        assert_eq!(config.spawn.apple_fall_speed, 350.0);
    }

    #[test]
    fn test_rejects_zero_screen() {
        let config = AppleConfig::with_screen(0.0, 800.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveScreen { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_item_size() {
        let config = AppleConfig {
            star_size: Vec2::new(-5.0, 10.0),
            ..AppleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSize { item: "star", .. })
        ));
    }

    #[test]
    fn test_rejects_item_wider_than_screen() {
        let config = AppleConfig {
            apple_size: Vec2::new(400.0, 100.0),
            ..AppleConfig::with_screen(400.0, 800.0)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ItemWiderThanScreen { item: "apple", .. })
        ));
    }

    #[test]
    fn test_rejects_misordered_thresholds() {
        let mut config = AppleConfig::default();
        config.spawn.star_threshold = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn test_spawn_width_uses_widest_item() {
        let config = AppleConfig {
            apple_size: Vec2::new(80.0, 80.0),
            star_size: Vec2::new(120.0, 120.0),
            ..AppleConfig::with_screen(1000.0, 1600.0)
        };
        assert_eq!(config.spawn_width(), 880);
    }

    #[test]
    fn test_json_partial_overrides() {
        let config = AppleConfig::from_json_str(
            r#"{"screen_width": 720.0, "initial_lives": 5, "spawn": {"apple_threshold": 20}}"#,
        )
        .unwrap();
        assert_eq!(config.screen_width, 720.0);
        assert_eq!(config.screen_height, SCREEN_HEIGHT);
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.spawn.apple_threshold, 20);
        assert_eq!(config.spawn.star_threshold, STAR_THRESHOLD);
    }

    #[test]
    fn test_json_invalid_values_rejected() {
        let err = AppleConfig::from_json_str(r#"{"initial_lives": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroLives));

        let err = AppleConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
