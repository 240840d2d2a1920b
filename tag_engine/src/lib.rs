//! `tag_engine`
//!
//! Simulation side of the game:
//! - Authoritative engine state (scenes, players, timers)
//! - Role swaps, collision scoring and match expiry
//! - Fixed timestep loop with frame pacing
//!
//! Threading model:
//! - Everything runs on one thread; listeners are `Rc<RefCell<_>>`.

pub mod clock;
pub mod engine;
pub mod game_loop;

pub use engine::SimulationEngine;
pub use game_loop::GameLoop;
