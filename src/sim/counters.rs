//! Score and life counters

use serde::{Deserialize, Serialize};

/// Points earned this session (never decreases)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsCounter {
    points: u32,
}

impl PointsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

/// Lives left this session (never increases, floors at 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivesCounter {
    remaining: u32,
}

impl LivesCounter {
    pub fn new(lives: u32) -> Self {
        Self { remaining: lives }
    }

    pub fn subtract_life(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
