//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend.
//! A renderer draws one frame per tick for whichever scene is current.

use crate::view::GameView;

/// A minimal per-scene rendering API.
pub trait RenderBackend {
    fn render_menu(&mut self, view: &GameView);
    fn render_play(&mut self, view: &GameView);
    /// Paused play: the frozen play frame under an overlay.
    fn render_pause(&mut self, view: &GameView);
    fn render_endgame(&mut self, view: &GameView);
}
