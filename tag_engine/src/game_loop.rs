//! Fixed-timestep game loop.
//!
//! Owns the event bus and a shared handle to the engine. Each frame posts one
//! `Tick`, lets every listener finish, checks the engine's stopped flag, then
//! sleeps until the next frame deadline. All state mutation happens inside
//! `EventBus::post` on the loop's thread.

use std::{cell::RefCell, rc::Rc, time::Duration};

use tag_shared::{
    config::GameConfig,
    event::{Event, EventBus, Listener},
};
use tokio::time::Instant;
use tracing::info;

use crate::engine::SimulationEngine;

/// Drives a [`SimulationEngine`] and the collaborators registered with it.
pub struct GameLoop {
    bus: EventBus,
    engine: Rc<RefCell<SimulationEngine>>,
    tick_interval: Duration,
}

impl GameLoop {
    /// Creates the engine and registers it as the first listener.
    pub fn new(cfg: GameConfig) -> Self {
        let tick_interval = cfg.tick_interval();
        let engine = Rc::new(RefCell::new(SimulationEngine::new(cfg)));
        let mut bus = EventBus::default();
        bus.register(engine.clone());
        Self {
            bus,
            engine,
            tick_interval,
        }
    }

    /// Shared read handle for collaborators that render or translate input.
    pub fn engine(&self) -> Rc<RefCell<SimulationEngine>> {
        self.engine.clone()
    }

    /// Registers a collaborator after the engine.
    pub fn register<L: Listener + 'static>(&mut self, listener: Rc<RefCell<L>>) {
        self.bus.register(listener);
    }

    /// Posts an event and processes it fully before returning.
    pub fn post(&self, event: Event) {
        self.bus.post(event);
    }

    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    /// Starts a session: the engine builds its players and pushes Menu.
    pub fn start(&self) {
        self.post(Event::Initialize);
    }

    /// Posts one `Tick` without frame pacing. Returns whether the engine is
    /// still running afterwards.
    pub fn step(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        let tick = {
            let engine = self.engine.borrow();
            Event::Tick {
                round_timer: engine.round_timer(),
                game_timer: engine.game_timer(),
            }
        };
        self.post(tick);
        self.is_running()
    }

    /// Runs the paced loop until the engine stops. Returns the number of
    /// ticks posted.
    pub async fn run(&self) -> u64 {
        self.start();
        let mut ticks = 0;
        let mut next_tick = Instant::now();
        while self.is_running() {
            self.step();
            ticks += 1;
            if !self.is_running() {
                break;
            }
            next_tick += self.tick_interval;
            tokio::time::sleep_until(next_tick).await;
        }
        info!(ticks, "Game loop finished");
        ticks
    }

    /// Runs the paced loop for at most `ticks` frames, without posting
    /// `Initialize`.
    pub async fn run_for_ticks(&self, ticks: u32) -> u32 {
        let mut next = Instant::now();
        let mut done = 0;
        for _ in 0..ticks {
            if !self.is_running() {
                break;
            }
            self.step();
            done += 1;
            next += self.tick_interval;
            tokio::time::sleep_until(next).await;
        }
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tag_shared::{event::SceneChange, scene::Scene};

    #[test]
    fn start_then_play_counts_down() {
        let game = GameLoop::new(GameConfig::default());
        game.start();
        game.post(Event::SceneChange(SceneChange::Push(Scene::Play)));
        for _ in 0..10 {
            assert!(game.step());
        }
        let engine = game.engine();
        assert_eq!(engine.borrow().game_timer(), 3590);
        assert_eq!(engine.borrow().round_timer(), 50);
    }

    #[test]
    fn step_after_quit_does_nothing() {
        let game = GameLoop::new(GameConfig::default());
        game.start();
        game.post(Event::SceneChange(SceneChange::Push(Scene::Play)));
        game.post(Event::Quit);
        assert!(!game.step());
        assert_eq!(game.engine().borrow().game_timer(), 3600);
    }
}
