//! Arcade Minigames entry point
//!
//! Headless demo: plays the apple game with an autopilot basket until the
//! lives run out (or a time limit is hit), then prints the session results.
//!
//! Usage: `arcade-minigames [seed] [config.json]`

use std::sync::{Arc, Mutex};

use arcade_minigames::profile::{ProfileObserver, UserProfile};
use arcade_minigames::sim::{AppleGameManager, ItemKind};
use arcade_minigames::{AppleConfig, Game, GameKind};

/// Give up after ten simulated minutes
const MAX_DEMO_SECONDS: f32 = 600.0;
/// Autopilot basket speed (pixels per tick)
const AUTOPILOT_STEP: f32 = 24.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppleConfig::default(),
    };

    let mut manager = match AppleGameManager::seeded(config, Game::new(GameKind::Apple), seed) {
        Ok(manager) => manager,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Apple game initialized with seed: {}", seed);

    let profile = Arc::new(Mutex::new(UserProfile::new("autopilot")));
    manager.add_observer(Box::new(ProfileObserver::new(Arc::clone(&profile))));
    manager.create_game_items();

    while manager.update() {
        if let Some(target) = autopilot_target(&manager) {
            manager.move_basket(target);
        }
        if manager.elapsed_seconds() >= MAX_DEMO_SECONDS {
            log::info!("Demo time limit reached");
            manager.stop();
            break;
        }
    }

    let stats = manager.game().statistics;
    println!(
        "Seed {}: {} points, {} stars, {} taps in {:.1}s",
        seed,
        stats.points,
        stats.stars,
        stats.taps,
        manager.elapsed_seconds()
    );
    if let Ok(profile) = profile.lock() {
        if let Ok(json) = profile.to_json() {
            println!("{}", json);
        }
    }
}

fn load_config(path: &str) -> Result<AppleConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(AppleConfig::from_json_str(&json)?)
}

/// Steer toward the lowest apple (stars only when no apple is falling)
///
/// The basket moves at a limited speed, so fast drops still get missed.
fn autopilot_target(manager: &AppleGameManager) -> Option<f32> {
    let basket = manager.basket_bounds()?;
    let lowest = |kind: ItemKind| {
        manager
            .game_items()
            .iter()
            .filter(|item| item.kind == kind && item.pos.y < basket.max.y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    };
    let target = lowest(ItemKind::Apple).or_else(|| lowest(ItemKind::Star))?;

    let basket_center = (basket.min.x + basket.max.x) / 2.0;
    let target_center = target.pos.x + target.size.x / 2.0;
    let delta = (target_center - basket_center).clamp(-AUTOPILOT_STEP, AUTOPILOT_STEP);
    if delta.abs() < 1.0 {
        return None;
    }
    Some(basket_center + delta)
}
