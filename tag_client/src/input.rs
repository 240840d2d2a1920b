//! Input handling.
//!
//! In a real game this would sample a keyboard every frame. Here keys arrive
//! over a channel (fed by the console thread) and are translated into bus
//! events on each `Tick`, so input never touches engine state directly.

use std::{cell::RefCell, rc::Rc, str::FromStr};

use tag_shared::{
    event::{Event, Listener, Outbox, SceneChange},
    player::{Direction, PlayerId},
    scene::Scene,
    view::ViewSource,
};
use tokio::sync::mpsc;
use tracing::debug;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    P,
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Window close request.
    Close,
}

impl FromStr for Key {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "space" => Key::Space,
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            "p" | "pause" => Key::P,
            "w" => Key::W,
            "a" => Key::A,
            "s" => Key::S,
            "d" => Key::D,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "quit" | "exit" => Key::Close,
            other => anyhow::bail!("unknown key {other:?}"),
        };
        Ok(key)
    }
}

impl Key {
    /// Movement binding: WASD drives player 0, the arrows drive player 1.
    pub fn movement(self) -> Option<(PlayerId, Direction)> {
        match self {
            Key::W => Some((0, Direction::Up)),
            Key::A => Some((0, Direction::Left)),
            Key::S => Some((0, Direction::Down)),
            Key::D => Some((0, Direction::Right)),
            Key::Up => Some((1, Direction::Up)),
            Key::Left => Some((1, Direction::Left)),
            Key::Down => Some((1, Direction::Down)),
            Key::Right => Some((1, Direction::Right)),
            _ => None,
        }
    }
}

/// Maps a key press to the event it means in `scene`, if any.
pub fn translate(key: Key, scene: Option<Scene>) -> Option<Event> {
    if key == Key::Close {
        return Some(Event::Quit);
    }
    match (scene?, key) {
        (Scene::EndGame, Key::Escape) => Some(Event::Quit),
        (_, Key::Escape) => Some(Event::SceneChange(SceneChange::Pop)),
        (Scene::Menu, Key::Space) => Some(Event::SceneChange(SceneChange::Push(Scene::Play))),
        (Scene::Play, Key::P) => Some(Event::SceneChange(SceneChange::Push(Scene::Pause))),
        (Scene::Pause, Key::Enter) => Some(Event::SceneChange(SceneChange::Pop)),
        (Scene::Play, key) => key.movement().map(|(player_id, direction)| Event::PlayerMove {
            player_id,
            direction,
        }),
        _ => None,
    }
}

/// Bus listener turning queued key presses into events on every tick.
pub struct Controller<S> {
    source: Rc<RefCell<S>>,
    keys: mpsc::Receiver<Key>,
}

impl<S: ViewSource> Controller<S> {
    pub fn new(source: Rc<RefCell<S>>, keys: mpsc::Receiver<Key>) -> Self {
        Self { source, keys }
    }
}

impl<S: ViewSource> Listener for Controller<S> {
    fn notify(&mut self, event: &Event, outbox: &mut Outbox) {
        if !matches!(event, Event::Tick { .. }) {
            return;
        }
        let scene = self.source.borrow().view().scene;
        // Keys after a scene change wait for the next tick, which sees the new scene.
        while let Ok(key) = self.keys.try_recv() {
            match translate(key, scene) {
                Some(ev) => {
                    outbox.post(ev);
                    if !matches!(ev, Event::PlayerMove { .. }) {
                        break;
                    }
                }
                None => debug!(?key, ?scene, "Key ignored"),
            }
        }
    }
}
