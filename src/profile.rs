//! Player profiles and rankings
//!
//! A profile keeps running totals across every session plus the best single
//! session, and is serialized as JSON by whoever owns storage.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::sim::GameStateObserver;
use crate::stats::{Game, Statistics};

/// One player's record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Sum of every finished session
    pub totals: Statistics,
    /// Best single session (most points, earliest wins ties)
    pub top_session: Statistics,
    pub sessions: u32,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a finished session
    ///
    /// Returns true if it became the new best session.
    pub fn record_session(&mut self, session: &Statistics) -> bool {
        self.totals.accumulate(session);
        self.sessions = self.sessions.saturating_add(1);

        let is_best = self.sessions == 1 || session.points > self.top_session.points;
        if is_best {
            self.top_session = *session;
        }
        is_best
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Orders profiles by the points of their best session
pub fn by_top_points(a: &UserProfile, b: &UserProfile) -> Ordering {
    a.top_session.points.cmp(&b.top_session.points)
}

/// Orders profiles by the stars of their best session
pub fn by_top_stars(a: &UserProfile, b: &UserProfile) -> Ordering {
    a.top_session.stars.cmp(&b.top_session.stars)
}

/// Orders profiles by the taps of their best session
pub fn by_top_taps(a: &UserProfile, b: &UserProfile) -> Ordering {
    a.top_session.taps.cmp(&b.top_session.taps)
}

/// Profiles ranked best-first under `compare` (stable for equal entries)
pub fn leaderboard<'a, F>(profiles: &'a [UserProfile], compare: F) -> Vec<&'a UserProfile>
where
    F: Fn(&UserProfile, &UserProfile) -> Ordering,
{
    let mut ranked: Vec<&UserProfile> = profiles.iter().collect();
    ranked.sort_by(|a, b| compare(*b, *a));
    ranked
}

/// Records every finished session into a shared profile
#[derive(Debug, Clone)]
pub struct ProfileObserver {
    profile: Arc<Mutex<UserProfile>>,
}

impl ProfileObserver {
    pub fn new(profile: Arc<Mutex<UserProfile>>) -> Self {
        Self { profile }
    }
}

impl GameStateObserver for ProfileObserver {
    fn game_over(&mut self, game: &Game, session: &Statistics) {
        let mut profile = self.profile.lock().unwrap_or_else(PoisonError::into_inner);
        let best = profile.record_session(session);
        log::info!(
            "{}: {} session recorded for {} ({} sessions{})",
            profile.name,
            game.kind.as_str(),
            session.points,
            profile.sessions,
            if best { ", new best" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GameKind;

    fn profile(name: &str, points: u64, stars: u64, taps: u64) -> UserProfile {
        let mut profile = UserProfile::new(name);
        profile.record_session(&Statistics::new(points, stars, taps));
        profile
    }

    #[test]
    fn test_record_session_tracks_totals_and_best() {
        let mut profile = UserProfile::new("ana");
        assert!(profile.record_session(&Statistics::new(5, 1, 20)));
        assert!(!profile.record_session(&Statistics::new(3, 4, 90)));
        assert!(profile.record_session(&Statistics::new(8, 0, 10)));

        assert_eq!(profile.sessions, 3);
        assert_eq!(profile.totals, Statistics::new(16, 5, 120));
        assert_eq!(profile.top_session, Statistics::new(8, 0, 10));
    }

    #[test]
    fn test_first_zero_session_is_best() {
        let mut profile = UserProfile::new("zero");
        assert!(profile.record_session(&Statistics::default()));
        assert_eq!(profile.sessions, 1);
    }

    #[test]
    fn test_comparators_are_ascending() {
        let low = profile("low", 1, 9, 5);
        let high = profile("high", 7, 2, 50);
        assert_eq!(by_top_points(&low, &high), Ordering::Less);
        assert_eq!(by_top_stars(&low, &high), Ordering::Greater);
        assert_eq!(by_top_taps(&low, &high), Ordering::Less);
        assert_eq!(by_top_taps(&high, &high), Ordering::Equal);
    }

    #[test]
    fn test_leaderboard_best_first() {
        let profiles = vec![
            profile("a", 3, 0, 30),
            profile("b", 9, 0, 10),
            profile("c", 5, 0, 20),
        ];
        let names: Vec<&str> = leaderboard(&profiles, by_top_points)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);

        let names: Vec<&str> = leaderboard(&profiles, by_top_taps)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_json_persistence() {
        let original = profile("json", 4, 2, 11);
        let json = original.to_json().unwrap();
        assert_eq!(UserProfile::from_json(&json).unwrap(), original);
        assert!(UserProfile::from_json("{").is_err());
    }

    #[test]
    fn test_observer_records_session() {
        let shared = Arc::new(Mutex::new(UserProfile::new("obs")));
        let mut observer = ProfileObserver::new(shared.clone());
        let game = Game::with_statistics(GameKind::Apple, Statistics::new(50, 5, 50));
        observer.game_over(&game, &Statistics::new(2, 1, 3));

        let profile = shared.lock().unwrap();
        assert_eq!(profile.totals, Statistics::new(2, 1, 3));
        assert_eq!(profile.sessions, 1);
    }
}
