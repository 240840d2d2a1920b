//! Shared helpers for the integration tests.

use std::{cell::RefCell, rc::Rc};

use tag_engine::GameLoop;
use tag_shared::{
    config::GameConfig,
    event::{Event, Listener, Outbox, SceneChange},
    scene::Scene,
};

/// Listener that remembers every event it is shown.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }

    pub fn ticks(&self) -> usize {
        self.count(|e| matches!(e, Event::Tick { .. }))
    }
}

impl Listener for Recorder {
    fn notify(&mut self, event: &Event, _outbox: &mut Outbox) {
        self.events.push(*event);
    }
}

/// Posts `Quit` on the n-th tick it sees.
pub struct QuitAfter {
    remaining: u32,
}

impl QuitAfter {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }
}

impl Listener for QuitAfter {
    fn notify(&mut self, event: &Event, outbox: &mut Outbox) {
        if let Event::Tick { .. } = event {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                outbox.post(Event::Quit);
            }
        }
    }
}

/// The documented default session: 800x600 arena, radius 20, 60 Hz,
/// rounds of 60 ticks, matches of 3600 ticks.
pub fn scenario_config() -> GameConfig {
    GameConfig::default()
}

/// A started session with a recorder registered after the engine.
pub fn new_game(cfg: GameConfig) -> (GameLoop, Rc<RefCell<Recorder>>) {
    let mut game = GameLoop::new(cfg);
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    game.register(recorder.clone());
    game.start();
    (game, recorder)
}

/// Like [`new_game`], already in the Play scene.
pub fn playing_game(cfg: GameConfig) -> (GameLoop, Rc<RefCell<Recorder>>) {
    let (game, recorder) = new_game(cfg);
    game.post(Event::SceneChange(SceneChange::Push(Scene::Play)));
    (game, recorder)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}
