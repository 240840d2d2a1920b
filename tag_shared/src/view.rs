//! Read-only state surface for collaborators.
//!
//! Renderers and input translators see the game only through [`GameView`]
//! snapshots; all mutation goes through bus events.

use serde::Serialize;

use crate::{
    math::Vec2,
    player::{Player, PlayerId, Role},
    scene::Scene,
};

/// Display names, indexed by player id.
pub const PLAYER_NAMES: [&str; 2] = ["Green", "Magenta"];

/// Snapshot of one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub position: Vec2,
    pub role: Role,
    pub score: u32,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id(),
            position: p.position(),
            role: p.role(),
            score: p.score(),
        }
    }
}

impl PlayerView {
    pub fn name(&self) -> &'static str {
        PLAYER_NAMES[self.id]
    }
}

/// Snapshot of everything a renderer may draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub scene: Option<Scene>,
    pub players: [PlayerView; 2],
    pub round_timer: u32,
    pub game_timer: u32,
    pub round_length: u32,
    pub tick_rate: u32,
    /// Measured frames per second.
    pub fps: f32,
}

impl GameView {
    /// Seconds left in the current round.
    pub fn round_seconds(&self) -> f32 {
        self.round_timer as f32 / self.tick_rate.max(1) as f32
    }

    /// Fraction of the round still remaining, in `[0, 1]`.
    pub fn round_fraction(&self) -> f32 {
        (self.round_timer as f32 / self.round_length.max(1) as f32).clamp(0.0, 1.0)
    }

    pub fn attacker(&self) -> &PlayerView {
        self.players
            .iter()
            .find(|p| p.role == Role::Attacker)
            .unwrap_or(&self.players[1])
    }

    /// The player with the higher score, or `None` on a tie.
    pub fn winner(&self) -> Option<&PlayerView> {
        let [a, b] = &self.players;
        match a.score.cmp(&b.score) {
            std::cmp::Ordering::Greater => Some(a),
            std::cmp::Ordering::Less => Some(b),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Anything that can produce a [`GameView`].
pub trait ViewSource {
    fn view(&self) -> GameView;
}
