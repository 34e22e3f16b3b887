//! Loop driver
//!
//! Runs `GameManager::update` on a dedicated thread at a fixed cadence. The
//! manager sits behind a mutex so a render thread can read the live items
//! between ticks without seeing a half-applied tick.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{GameItem, GameManager, GamePolicy};

/// Manager shared between the loop thread and the renderer
pub type SharedManager<P> = Arc<Mutex<GameManager<P>>>;

/// Fixed-step accumulator
///
/// Converts variable frame times into a whole number of simulation ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Add one frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // Long stalls (debugger, suspended app) are not replayed
        self.accumulator += frame_dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }
}

/// Background game loop
pub struct GameLoop<P: GamePolicy + Send + 'static> {
    manager: SharedManager<P>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<P: GamePolicy + Send + 'static> GameLoop<P> {
    /// Spawn the loop thread, ticking once per `tick`
    pub fn start(manager: SharedManager<P>, tick: Duration) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));

        let handle = {
            let manager = Arc::clone(&manager);
            let running = Arc::clone(&running);
            thread::Builder::new()
                .name("game-loop".to_string())
                .spawn(move || run_loop(&manager, &running, tick))?
        };
        log::info!("Game loop started ({:?} per tick)", tick);

        Ok(Self {
            manager,
            running,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Copy of the live items for drawing
    pub fn items_to_draw(&self) -> Vec<GameItem> {
        lock(&self.manager).snapshot_items()
    }

    /// Block until the game ends by itself
    pub fn wait(mut self) {
        self.join_thread();
    }

    /// Stop the loop, join it, then end the game
    ///
    /// Returns true if this call performed the game-over transition (false
    /// when the game had already ended on its own).
    pub fn stop(&mut self) -> bool {
        self.running.store(false, Ordering::Release);
        self.join_thread();
        lock(&self.manager).stop()
    }

    fn join_thread(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Game loop thread panicked");
            }
        }
    }
}

impl<P: GamePolicy + Send + 'static> Drop for GameLoop<P> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
        }
    }
}

fn lock<P>(manager: &Mutex<GameManager<P>>) -> std::sync::MutexGuard<'_, GameManager<P>> {
    manager.lock().unwrap_or_else(PoisonError::into_inner)
}

fn run_loop<P: GamePolicy>(manager: &Mutex<GameManager<P>>, running: &AtomicBool, tick: Duration) {
    let mut clock = FrameClock::new(tick.as_secs_f32());
    let mut last = Instant::now();

    while running.load(Ordering::Acquire) {
        let now = Instant::now();
        let ticks = clock.advance(now.duration_since(last).as_secs_f32());
        last = now;

        for _ in 0..ticks {
            if !lock(manager).update() {
                running.store(false, Ordering::Release);
                log::info!("Game loop finished");
                return;
            }
        }
        thread::sleep(tick);
    }
    log::info!("Game loop stopped");
}
