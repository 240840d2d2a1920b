//! `tag_client`
//!
//! Collaborators around the engine:
//! - Key translation into bus events
//! - Per-tick rendering from read-only snapshots
//! - A headless text backend

pub mod input;
pub mod text;
pub mod view;

pub use input::Controller;
pub use view::View;
