//! Game manager: the minigame loop skeleton
//!
//! `GameManager` owns the live items, the tick counter, the observers and the
//! one-way Active -> GameOver transition. Everything specific to a minigame
//! (starting items, spawning, scoring) is supplied by a `GamePolicy`.

use glam::Vec2;

use super::item::{GameItem, ItemId, ItemKind, ItemStore};
use super::movement::MovementInfo;
use super::result::ItemResult;
use super::spawn::SpawnSource;
use crate::stats::{Game, Statistics};

/// Lifecycle of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GamePhase {
    /// Items are being updated each tick
    Active,
    /// Session ended; terminal
    GameOver,
}

/// Listener notified on session lifecycle transitions
pub trait GameStateObserver: Send {
    /// Called once when the starting items have been created
    fn game_started(&mut self, _game: &Game) {}

    /// Called exactly once per session, after `session` was folded into
    /// `game.statistics`
    fn game_over(&mut self, game: &Game, session: &Statistics);
}

/// Per-minigame hooks driven by `GameManager`
pub trait GamePolicy {
    /// Populate the fixed items (catcher, counters) before the first tick
    fn create_game_items(&mut self, items: &mut ItemStore);

    fn lives_remaining(&self) -> u32;

    /// Build the snapshot every item sees this tick
    fn movement_info(&self, items: &ItemStore, dt: f32, elapsed: f32) -> MovementInfo;

    /// Apply the score/life effects of one item result
    fn update_statistics(&mut self, result: &ItemResult);

    /// Possibly add new items (called once per tick, after removal)
    fn spawn_new(&mut self, items: &mut ItemStore, rng: &mut dyn SpawnSource);

    /// This session's totals, folded into the game's record on game over
    fn session_statistics(&self, taps: u32) -> Statistics;
}

/// Drives one minigame session
pub struct GameManager<P> {
    policy: P,
    items: ItemStore,
    game: Game,
    observers: Vec<Box<dyn GameStateObserver>>,
    rng: Box<dyn SpawnSource>,
    phase: GamePhase,
    started: bool,
    /// Simulation tick counter
    ticks: u64,
    taps: u32,
    tick_seconds: f32,
}

impl<P: GamePolicy> GameManager<P> {
    /// Unvalidated constructor; public entry points check their config first
    pub(crate) fn with_policy(
        policy: P,
        game: Game,
        tick_seconds: f32,
        rng: Box<dyn SpawnSource>,
    ) -> Self {
        Self {
            policy,
            items: ItemStore::new(),
            game,
            observers: Vec::new(),
            rng,
            phase: GamePhase::Active,
            started: false,
            ticks: 0,
            taps: 0,
            tick_seconds,
        }
    }

    /// Create the starting items (first call only)
    ///
    /// Returns false if the items were already created or the game is over.
    pub fn create_game_items(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            log::debug!("{} game over, not creating items", self.game.kind.as_str());
            return false;
        }
        if self.started {
            log::warn!("{} items already created", self.game.kind.as_str());
            return false;
        }
        self.started = true;
        self.policy.create_game_items(&mut self.items);
        log::info!(
            "{} game started with {} items",
            self.game.kind.as_str(),
            self.items.len()
        );
        for observer in &mut self.observers {
            observer.game_started(&self.game);
        }
        true
    }

    /// Advance one tick; returns whether the game is still live
    pub fn update(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        if !self.started {
            self.create_game_items();
        }

        // Terminal check short-circuits all per-tick work
        if self.policy.lives_remaining() == 0 {
            self.game_over();
            return false;
        }

        self.ticks += 1;
        let info =
            self.policy
                .movement_info(&self.items, self.tick_seconds, self.elapsed_seconds());

        let mut old_items: Vec<ItemId> = Vec::new();
        for item in self.items.iter_mut() {
            let result = item.update(&info);
            old_items.extend_from_slice(&result.old_items);
            self.policy.update_statistics(&result);
        }

        self.items.remove_all(&old_items);
        self.policy.spawn_new(&mut self.items, self.rng.as_mut());
        true
    }

    /// Terminal transition
    ///
    /// Folds this session into the game's statistics and notifies every
    /// observer. Only the first call has any effect; returns whether this
    /// call performed the transition.
    pub fn game_over(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            log::debug!("{} game already over", self.game.kind.as_str());
            return false;
        }
        self.phase = GamePhase::GameOver;

        let session = self.policy.session_statistics(self.taps);
        self.game.statistics.accumulate(&session);
        log::info!(
            "{} game over after {} ticks: {:?} (totals {:?})",
            self.game.kind.as_str(),
            self.ticks,
            session,
            self.game.statistics
        );

        for observer in &mut self.observers {
            observer.game_over(&self.game, &session);
        }
        true
    }

    /// External stop (surface destroyed, player quit)
    pub fn stop(&mut self) -> bool {
        self.game_over()
    }

    /// Register an observer; observers are notified in insertion order
    pub fn add_observer(&mut self, observer: Box<dyn GameStateObserver>) {
        self.observers.push(observer);
    }

    /// Count one player tap (ignored after game over)
    pub fn record_tap(&mut self) {
        if self.phase == GamePhase::Active {
            self.taps = self.taps.saturating_add(1);
        }
    }

    /// Insert an item at its final position
    pub fn spawn_item(&mut self, kind: ItemKind, pos: Vec2, size: Vec2, vel: Vec2) -> ItemId {
        self.items.spawn(kind, pos, size, vel)
    }

    /// Remove an item; absent ids are a no-op
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        self.items.remove(id)
    }

    /// Live items in draw order
    pub fn game_items(&self) -> &[GameItem] {
        self.items.as_slice()
    }

    /// Owned copy of the draw list (for handing to a render thread)
    pub fn snapshot_items(&self) -> Vec<GameItem> {
        self.items.as_slice().to_vec()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.ticks as f32 * self.tick_seconds
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub(crate) fn items_mut(&mut self) -> &mut ItemStore {
        &mut self.items
    }
}
