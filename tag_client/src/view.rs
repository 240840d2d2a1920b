//! Rendering listener.
//!
//! Draws the current scene once per `Tick` from a read-only [`GameView`].

use std::{cell::RefCell, rc::Rc};

use tag_shared::{
    event::{Event, Listener, Outbox},
    render::RenderBackend,
    scene::Scene,
    view::{GameView, ViewSource},
};

/// Feeds engine snapshots to a [`RenderBackend`].
pub struct View<S, B> {
    source: Rc<RefCell<S>>,
    backend: B,
}

impl<S: ViewSource, B: RenderBackend> View<S, B> {
    pub fn new(source: Rc<RefCell<S>>, backend: B) -> Self {
        Self { source, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn render(&mut self, view: &GameView) {
        match view.scene {
            Some(Scene::Menu) => self.backend.render_menu(view),
            Some(Scene::Play) => self.backend.render_play(view),
            Some(Scene::Pause) => self.backend.render_pause(view),
            Some(Scene::EndGame) => self.backend.render_endgame(view),
            None => {}
        }
    }
}

impl<S: ViewSource, B: RenderBackend> Listener for View<S, B> {
    fn notify(&mut self, event: &Event, _outbox: &mut Outbox) {
        if let Event::Tick { .. } = event {
            let view = self.source.borrow().view();
            self.render(&view);
        }
    }
}
