//! Event and messaging system.
//!
//! This is a small synchronous observer bus.
//! - Engine: consumes every event, emits `RoundTimesUp` and `Quit`.
//! - Collaborators (input, rendering): react to `Tick`, emit input events.
//!
//! Listeners post follow-up events through the [`Outbox`] passed to
//! [`Listener::notify`]. The bus dispatches them depth-first as soon as the
//! emitting listener returns, before the original event reaches the next
//! listener. No listener is ever borrowed twice.

use std::{cell::RefCell, rc::Rc};

use tracing::trace;

use crate::{
    player::{Direction, PlayerId},
    scene::Scene,
};

/// Scene transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    Push(Scene),
    Pop,
}

/// Everything that can travel over the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Initialize,
    /// One fixed-rate step, carrying the timers as they were when posted.
    Tick { round_timer: u32, game_timer: u32 },
    SceneChange(SceneChange),
    Quit,
    PlayerMove {
        player_id: PlayerId,
        direction: Direction,
    },
    /// The match timer expired.
    RoundTimesUp,
}

/// Follow-up events emitted while handling an event.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: Vec<Event>,
}

impl Outbox {
    /// Queues `event`; the bus dispatches it only after the current `notify` returns.
    pub fn post(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Events posted so far, in order.
    pub fn events(&self) -> &[Event] {
        &self.pending
    }

    fn drain(&mut self) -> std::vec::Drain<'_, Event> {
        self.pending.drain(..)
    }
}

/// Bus subscriber.
pub trait Listener {
    fn notify(&mut self, event: &Event, outbox: &mut Outbox);
}

/// Shared handle to a registered listener.
pub type ListenerHandle = Rc<RefCell<dyn Listener>>;

/// Ordered, synchronous event bus.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<ListenerHandle>,
}

impl EventBus {
    /// Appends a listener. Registration order is notification order.
    pub fn register<L: Listener + 'static>(&mut self, listener: Rc<RefCell<L>>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers `event` to every listener and returns once all of them,
    /// and everything they posted in turn, have been processed.
    pub fn post(&self, event: Event) {
        trace!(?event, "post");
        for listener in &self.listeners {
            let mut outbox = Outbox::default();
            listener.borrow_mut().notify(&event, &mut outbox);
            for follow_up in outbox.drain() {
                self.post(follow_up);
            }
        }
    }
}
