//! Apple catch minigame
//!
//! Apples and stars fall from the top of the screen. Catching an apple
//! scores a point, dropping one costs a life, catching a star adds to the
//! star tally. The game ends when the last life is gone.

use glam::Vec2;

use super::counters::{LivesCounter, PointsCounter};
use super::item::{Bounds, ItemId, ItemKind, ItemStore};
use super::manager::{GameManager, GamePolicy};
use super::movement::MovementInfo;
use super::result::ItemResult;
use super::spawn::{SeededSpawns, SpawnSource};
use crate::config::AppleConfig;
use crate::consts::BASKET_MARGIN;
use crate::error::ConfigError;
use crate::stats::{Game, Statistics};

/// HUD text box size
const COUNTER_SIZE: Vec2 = Vec2::new(300.0, 60.0);
const HUD_MARGIN: f32 = 20.0;

/// Spawn, scoring and life rules for the apple game
#[derive(Debug, Clone)]
pub struct ApplePolicy {
    config: AppleConfig,
    basket: Option<ItemId>,
    points: PointsCounter,
    lives: LivesCounter,
    caught_stars: u32,
}

impl ApplePolicy {
    pub fn new(config: AppleConfig) -> Self {
        let lives = LivesCounter::new(config.initial_lives);
        Self {
            config,
            basket: None,
            points: PointsCounter::new(),
            lives,
            caught_stars: 0,
        }
    }

    pub fn config(&self) -> &AppleConfig {
        &self.config
    }

    pub fn points(&self) -> u32 {
        self.points.points()
    }

    pub fn lives(&self) -> &LivesCounter {
        &self.lives
    }

    pub fn caught_stars(&self) -> u32 {
        self.caught_stars
    }

    pub fn basket_id(&self) -> Option<ItemId> {
        self.basket
    }

    /// Drop a new item in from the top edge at `x`
    fn spawn_falling(&self, items: &mut ItemStore, kind: ItemKind, x: u32) -> ItemId {
        let (size, speed) = match kind {
            ItemKind::Star => (self.config.star_size, self.config.spawn.star_fall_speed),
            _ => (self.config.apple_size, self.config.spawn.apple_fall_speed),
        };
        let id = items.spawn(
            kind,
            Vec2::new(x as f32, 0.0),
            size,
            Vec2::new(0.0, speed),
        );
        log::debug!("Spawned {:?} #{} at x={}", kind, id, x);
        id
    }
}

impl GamePolicy for ApplePolicy {
    fn create_game_items(&mut self, items: &mut ItemStore) {
        let config = &self.config;

        items.spawn(
            ItemKind::PointsCounter,
            Vec2::new(HUD_MARGIN, HUD_MARGIN),
            COUNTER_SIZE,
            Vec2::ZERO,
        );
        let lives_counter = items.spawn(
            ItemKind::LivesCounter,
            Vec2::new(
                (config.screen_width - COUNTER_SIZE.x - HUD_MARGIN).max(0.0),
                HUD_MARGIN,
            ),
            COUNTER_SIZE,
            Vec2::ZERO,
        );
        if let Some(counter) = items.get_mut(lives_counter) {
            counter.set_counter(self.lives.remaining());
        }

        let basket_pos = Vec2::new(
            (config.screen_width - config.basket_size.x) / 2.0,
            (config.screen_height - config.basket_size.y - BASKET_MARGIN).max(0.0),
        );
        self.basket = Some(items.spawn(
            ItemKind::Basket,
            basket_pos,
            config.basket_size,
            Vec2::ZERO,
        ));
    }

    fn lives_remaining(&self) -> u32 {
        self.lives.remaining()
    }

    fn movement_info(&self, items: &ItemStore, dt: f32, elapsed: f32) -> MovementInfo {
        let basket = self
            .basket
            .and_then(|id| items.get(id))
            .map_or(Bounds::NONE, |basket| basket.bounds());
        MovementInfo {
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
            basket,
            dt,
            elapsed,
            points: self.points.points(),
            lives: self.lives.remaining(),
        }
    }

    fn update_statistics(&mut self, result: &ItemResult) {
        let Some(facets) = result.apple else {
            return;
        };
        if facets.apple_collected {
            self.points.add_points(1);
        }
        if facets.apple_dropped {
            self.lives.subtract_life();
            log::debug!("Apple dropped, {} lives left", self.lives.remaining());
        }
        if facets.star_collected {
            self.caught_stars += 1;
        }
    }

    fn spawn_new(&mut self, items: &mut ItemStore, rng: &mut dyn SpawnSource) {
        let x = rng.next_below(self.config.spawn_width());
        let roll = rng.next_below(self.config.spawn.range);

        if roll < self.config.spawn.star_threshold {
            self.spawn_falling(items, ItemKind::Star, x);
        } else if roll < self.config.spawn.apple_threshold {
            self.spawn_falling(items, ItemKind::Apple, x);
        }
    }

    fn session_statistics(&self, taps: u32) -> Statistics {
        Statistics::new(
            self.points.points() as u64,
            self.caught_stars as u64,
            taps as u64,
        )
    }
}

/// Manager for the apple catch minigame
pub type AppleGameManager = GameManager<ApplePolicy>;

impl GameManager<ApplePolicy> {
    /// Validate `config` and build a manager drawing spawns from `rng`
    pub fn new(
        config: AppleConfig,
        game: Game,
        rng: impl SpawnSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let tick_seconds = config.tick_seconds;
        Ok(Self::with_policy(
            ApplePolicy::new(config),
            game,
            tick_seconds,
            Box::new(rng),
        ))
    }

    /// Manager with a seeded PCG spawn source
    pub fn seeded(config: AppleConfig, game: Game, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, game, SeededSpawns::new(seed))
    }

    /// Move the basket so its center sits at `x`, clamped to the screen
    ///
    /// Each applied move counts as one tap. Ignored after game over and
    /// before the starting items exist.
    pub fn move_basket(&mut self, x: f32) {
        if self.is_game_over() {
            return;
        }
        let screen_width = self.policy().config().screen_width;
        let Some(id) = self.policy().basket_id() else {
            log::debug!("No basket yet, ignoring move to {}", x);
            return;
        };
        let Some(basket) = self.items_mut().get_mut(id) else {
            return;
        };
        let max_x = (screen_width - basket.size.x).max(0.0);
        basket.pos.x = (x - basket.size.x / 2.0).clamp(0.0, max_x);
        self.record_tap();
    }

    /// Current catcher bounds (if the starting items exist)
    pub fn basket_bounds(&self) -> Option<Bounds> {
        let id = self.policy().basket_id()?;
        self.game_items()
            .iter()
            .find(|item| item.id == id)
            .map(|basket| basket.bounds())
    }

    pub fn points(&self) -> u32 {
        self.policy().points()
    }

    pub fn lives_remaining(&self) -> u32 {
        self.policy().lives().remaining()
    }

    pub fn caught_stars(&self) -> u32 {
        self.policy().caught_stars()
    }
}
