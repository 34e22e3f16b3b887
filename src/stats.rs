//! Per-game statistics
//!
//! A `Statistics` record only ever grows: every finished session is added
//! on top of whatever the record already held.

use serde::{Deserialize, Serialize};

/// Minigames hosted by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GameKind {
    Apple,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Apple => "Apple",
        }
    }
}

/// Accumulated results of one or more play sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub points: u64,
    pub stars: u64,
    pub taps: u64,
}

impl Statistics {
    pub fn new(points: u64, stars: u64, taps: u64) -> Self {
        Self {
            points,
            stars,
            taps,
        }
    }

    /// Fold another record in (old + new, never overwrite)
    pub fn accumulate(&mut self, other: &Statistics) {
        self.points = self.points.saturating_add(other.points);
        self.stars = self.stars.saturating_add(other.stars);
        self.taps = self.taps.saturating_add(other.taps);
    }
}

/// A minigame and the statistics record owned by it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub kind: GameKind,
    pub statistics: Statistics,
}

impl Game {
    pub fn new(kind: GameKind) -> Self {
        Self {
            kind,
            statistics: Statistics::default(),
        }
    }

    pub fn with_statistics(kind: GameKind, statistics: Statistics) -> Self {
        Self { kind, statistics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_adds_every_field() {
        let mut stats = Statistics::new(10, 2, 40);
        stats.accumulate(&Statistics::new(3, 1, 7));
        assert_eq!(stats, Statistics::new(13, 3, 47));
    }

    #[test]
    fn test_accumulate_saturates() {
        let mut stats = Statistics::new(u64::MAX, 0, 0);
        stats.accumulate(&Statistics::new(5, 0, 0));
        assert_eq!(stats.points, u64::MAX);
    }
}
