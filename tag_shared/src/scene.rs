//! Scene stack.
//!
//! Scenes nest: Pause is pushed over Play and popped to resume. Only the top
//! entry is current. An empty stack is the terminal signal for the session.

use serde::Serialize;

/// A named mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scene {
    Menu,
    Play,
    Pause,
    EndGame,
}

/// Stack-based scene state machine.
///
/// `peek` and `pop` on an empty stack return `None` rather than panicking.
#[derive(Debug, Clone, Default)]
pub struct SceneStack {
    stack: Vec<Scene>,
}

impl SceneStack {
    /// Returns the current scene without altering the stack.
    pub fn peek(&self) -> Option<Scene> {
        self.stack.last().copied()
    }

    /// Removes and returns the current scene.
    pub fn pop(&mut self) -> Option<Scene> {
        self.stack.pop()
    }

    /// Pushes a new scene and returns it.
    pub fn push(&mut self, scene: Scene) -> Scene {
        self.stack.push(scene);
        scene
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
