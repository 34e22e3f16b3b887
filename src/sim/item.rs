//! Game items and the live-item collection
//!
//! Items are a closed set of kinds; per-kind behavior is a match in
//! `GameItem::update`, not dynamic dispatch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::movement::MovementInfo;
use super::result::{AppleResult, ItemResult, Outcome};

/// Stable identity of a live item
pub type ItemId = u32;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Empty bounds that overlap nothing
    pub const NONE: Bounds = Bounds {
        min: Vec2::splat(f32::INFINITY),
        max: Vec2::splat(f32::NEG_INFINITY),
    };

    /// Bounds of an item whose top-left corner is `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Overlap test; touching edges count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Catchable apple, costs a life when dropped
    Apple,
    /// Bonus star, harmless when missed
    Star,
    /// Player-controlled catcher
    Basket,
    /// HUD text showing points
    PointsCounter,
    /// HUD text showing lives
    LivesCounter,
}

impl ItemKind {
    /// Sprite key consumed by the renderer
    pub fn sprite_key(&self) -> &'static str {
        match self {
            ItemKind::Apple => "apple",
            ItemKind::Star => "star",
            ItemKind::Basket => "basket",
            ItemKind::PointsCounter => "points",
            ItemKind::LivesCounter => "lives",
        }
    }

    pub fn is_falling(&self) -> bool {
        matches!(self, ItemKind::Apple | ItemKind::Star)
    }
}

/// How an item looks; opaque to the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    Text(String),
    Sprite(String),
}

impl Appearance {
    fn initial(kind: ItemKind) -> Self {
        match kind {
            ItemKind::PointsCounter => Appearance::Text(points_text(0)),
            ItemKind::LivesCounter => Appearance::Text(lives_text(0)),
            _ => Appearance::Sprite(kind.sprite_key().to_string()),
        }
    }
}

fn points_text(points: u32) -> String {
    format!("Points: {}", points)
}

fn lives_text(lives: u32) -> String {
    format!("Lives: {}", lives)
}

/// A movable, drawable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameItem {
    pub id: ItemId,
    pub kind: ItemKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    /// Width, height
    pub size: Vec2,
    pub appearance: Appearance,
}

impl GameItem {
    /// Build an item that is fully positioned from the start
    pub fn new(id: ItemId, kind: ItemKind, pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            size,
            appearance: Appearance::initial(kind),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_pos_size(self.pos, self.size)
    }

    /// Advance this item by one tick
    ///
    /// Reads nothing but `info`, so updates within a tick are independent of
    /// each other.
    pub fn update(&mut self, info: &MovementInfo) -> ItemResult {
        match self.kind {
            ItemKind::Apple | ItemKind::Star => self.update_falling(info),
            ItemKind::Basket => ItemResult::none(),
            ItemKind::PointsCounter => {
                self.set_counter(info.points);
                ItemResult::none()
            }
            ItemKind::LivesCounter => {
                self.set_counter(info.lives);
                ItemResult::none()
            }
        }
    }

    /// Rewrite a HUD counter's text; other kinds are left alone
    pub fn set_counter(&mut self, value: u32) {
        match self.kind {
            ItemKind::PointsCounter => self.appearance = Appearance::Text(points_text(value)),
            ItemKind::LivesCounter => self.appearance = Appearance::Text(lives_text(value)),
            _ => {}
        }
    }

    fn update_falling(&mut self, info: &MovementInfo) -> ItemResult {
        self.pos += self.vel * info.dt;

        if self.bounds().overlaps(&info.basket) {
            let facets = match self.kind {
                ItemKind::Star => AppleResult::star_collected(),
                _ => AppleResult::apple_collected(),
            };
            return ItemResult::retire(self.id, Outcome::Collected, Some(facets));
        }

        if self.pos.y > info.screen_height {
            return match self.kind {
                ItemKind::Apple => ItemResult::retire(
                    self.id,
                    Outcome::Dropped,
                    Some(AppleResult::apple_dropped()),
                ),
                _ => ItemResult::retire(self.id, Outcome::Expired, None),
            };
        }

        ItemResult::none()
    }
}

/// Ordered collection of live items (insertion order = draw order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStore {
    items: Vec<GameItem>,
    next_id: ItemId,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate an id and insert an item already at its final position
    pub fn spawn(&mut self, kind: ItemKind, pos: Vec2, size: Vec2, vel: Vec2) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(GameItem::new(id, kind, pos, size, vel));
        id
    }

    /// Remove an item by id; absent ids are ignored
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every listed item in one pass
    pub fn remove_all(&mut self, ids: &[ItemId]) {
        if ids.is_empty() {
            return;
        }
        self.items.retain(|item| !ids.contains(&item.id));
    }

    pub fn get(&self, id: ItemId) -> Option<&GameItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut GameItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn as_slice(&self) -> &[GameItem] {
        &self.items
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GameItem> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_with_basket(basket: Bounds) -> MovementInfo {
        MovementInfo {
            screen_width: 800.0,
            screen_height: 600.0,
            basket,
            dt: 0.1,
            elapsed: 0.1,
            points: 0,
            lives: 3,
        }
    }

    #[test]
    fn test_bounds_overlap() {
        let a = Bounds::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Bounds::from_pos_size(Vec2::new(10.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Bounds::from_pos_size(Vec2::new(11.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b)); // touching edge
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&Bounds::NONE));
        assert!(!Bounds::NONE.overlaps(&a));
    }

    #[test]
    fn test_falling_item_integrates_velocity() {
        let mut apple = GameItem::new(
            1,
            ItemKind::Apple,
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 350.0),
        );
        let result = apple.update(&info_with_basket(Bounds::NONE));
        assert_eq!(result, ItemResult::none());
        assert!((apple.pos.y - 35.0).abs() < 0.001);
        assert_eq!(apple.pos.x, 100.0);
    }

    #[test]
    fn test_apple_caught_by_basket() {
        let basket = Bounds::from_pos_size(Vec2::new(100.0, 400.0), Vec2::new(200.0, 100.0));
        let mut apple = GameItem::new(
            7,
            ItemKind::Apple,
            Vec2::new(150.0, 350.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 100.0),
        );
        let result = apple.update(&info_with_basket(basket));
        assert_eq!(result.outcome, Outcome::Collected);
        assert_eq!(result.old_items, vec![7]);
        assert_eq!(result.apple, Some(AppleResult::apple_collected()));
    }

    #[test]
    fn test_apple_dropped_past_bottom() {
        let mut apple = GameItem::new(
            3,
            ItemKind::Apple,
            Vec2::new(10.0, 595.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 100.0),
        );
        let result = apple.update(&info_with_basket(Bounds::NONE));
        assert_eq!(result.outcome, Outcome::Dropped);
        assert_eq!(result.apple, Some(AppleResult::apple_dropped()));
        assert_eq!(result.old_items, vec![3]);
    }

    #[test]
    fn test_missed_star_expires_without_facets() {
        let mut star = GameItem::new(
            4,
            ItemKind::Star,
            Vec2::new(10.0, 599.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 250.0),
        );
        let result = star.update(&info_with_basket(Bounds::NONE));
        assert_eq!(result.outcome, Outcome::Expired);
        assert_eq!(result.apple, None);
        assert_eq!(result.old_items, vec![4]);
    }

    #[test]
    fn test_counter_text_follows_snapshot() {
        let mut counter = GameItem::new(
            2,
            ItemKind::LivesCounter,
            Vec2::ZERO,
            Vec2::new(100.0, 40.0),
            Vec2::ZERO,
        );
        counter.update(&info_with_basket(Bounds::NONE));
        assert_eq!(counter.appearance, Appearance::Text("Lives: 3".to_string()));
    }

    #[test]
    fn test_set_counter_only_touches_hud_items() {
        let mut points =
            GameItem::new(1, ItemKind::PointsCounter, Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        points.set_counter(12);
        assert_eq!(points.appearance, Appearance::Text("Points: 12".to_string()));

        let mut basket = GameItem::new(2, ItemKind::Basket, Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        basket.set_counter(12);
        assert_eq!(basket.appearance, Appearance::Sprite("basket".to_string()));
    }

    #[test]
    fn test_store_spawn_and_remove() {
        let mut store = ItemStore::new();
        let a = store.spawn(ItemKind::Apple, Vec2::new(1.0, 2.0), Vec2::ONE, Vec2::ZERO);
        let b = store.spawn(ItemKind::Star, Vec2::new(3.0, 4.0), Vec2::ONE, Vec2::ZERO);
        assert_ne!(a, b);
        assert_eq!(store.get(b).map(|item| item.pos), Some(Vec2::new(3.0, 4.0)));

        assert!(store.remove(a));
        assert!(!store.remove(a)); // already gone
        assert_eq!(store.len(), 1);

        store.remove_all(&[b, 999]);
        assert!(store.is_empty());
        store.remove_all(&[]);
    }
}
