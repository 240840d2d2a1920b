//! `tag_shared`
//!
//! Game types shared by the engine and its collaborators.
//!
//! Design goals:
//! - Deterministic, single-threaded simulation state.
//! - Closed event set dispatched by exhaustive matching.
//! - Collaborators read state through `view` and mutate it only via `event`.
//! - No `unsafe`.

pub mod config;
pub mod event;
pub mod math;
pub mod player;
pub mod render;
pub mod scene;
pub mod view;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::event::*;
    pub use crate::math::*;
    pub use crate::player::*;
    pub use crate::scene::*;
    pub use crate::view::*;
}
