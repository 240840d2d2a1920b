//! Player model.
//!
//! A player's speed is never stored independently of its role: every role
//! change goes through [`Player::swap_role`], which recomputes speed in the
//! same call.

use std::str::FromStr;

use serde::Serialize;

use crate::{config::GameConfig, math::Vec2};

/// Index of a player, 0 or 1.
pub type PlayerId = usize;

/// Which side of the chase a player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Attacker,
    Defender,
}

impl Role {
    /// Player 1 starts as the attacker, player 0 as the defender.
    pub fn initial_for(id: PlayerId) -> Self {
        if id == 1 {
            Role::Attacker
        } else {
            Role::Defender
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Role::Attacker => Role::Defender,
            Role::Defender => Role::Attacker,
        }
    }

    /// Short label drawn on the player token.
    pub fn label(self) -> &'static str {
        match self {
            Role::Attacker => "ATK",
            Role::Defender => "DEF",
        }
    }
}

/// Axis-aligned movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen coordinates (+y is down).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => anyhow::bail!("unknown direction {other:?}"),
        }
    }
}

/// Per-player constants copied out of [`GameConfig`].
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Attacker speed in pixels per second.
    pub attacker_speed: f32,
    /// Defender speed in pixels per second.
    pub defender_speed: f32,
    pub tick_rate: u32,
    /// Movement bounds; positions stay in `[0, arena]`.
    pub arena: Vec2,
    pub spawn: Vec2,
}

impl PlayerTuning {
    pub fn for_player(cfg: &GameConfig, id: PlayerId) -> Self {
        Self {
            attacker_speed: cfg.attacker_speed,
            defender_speed: cfg.defender_speed,
            tick_rate: cfg.tick_rate,
            arena: cfg.arena,
            spawn: cfg.initial_positions[id],
        }
    }

    pub fn speed_for(&self, role: Role) -> f32 {
        match role {
            Role::Attacker => self.attacker_speed,
            Role::Defender => self.defender_speed,
        }
    }
}

/// One player's kinematic and score state.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    role: Role,
    position: Vec2,
    speed: f32,
    score: u32,
    tuning: PlayerTuning,
}

impl Player {
    /// Spawns a player at its configured position with its starting role.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    pub fn new(id: PlayerId, cfg: &GameConfig) -> Self {
        let tuning = PlayerTuning::for_player(cfg, id);
        let role = Role::initial_for(id);
        Self {
            id,
            role,
            position: tuning.spawn,
            speed: tuning.speed_for(role),
            score: 0,
            tuning,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Moves one tick's worth of distance along `direction`, then clamps into the arena.
    pub fn move_in(&mut self, direction: Direction) {
        let step = self.speed / self.tuning.tick_rate as f32;
        self.position += direction.unit() * step;
        self.position = self.position.clamp_to(self.tuning.arena);
    }

    /// Restores the spawn position and role-derived speed. The role is kept.
    pub fn reset(&mut self) {
        self.position = self.tuning.spawn;
        self.speed = self.tuning.speed_for(self.role);
    }

    /// Inverts the role and recomputes speed for it.
    pub fn swap_role(&mut self) {
        self.role = self.role.inverted();
        self.speed = self.tuning.speed_for(self.role);
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn initial_roles_follow_player_id() {
        let cfg = cfg();
        let p0 = Player::new(0, &cfg);
        let p1 = Player::new(1, &cfg);
        assert_eq!(p0.role(), Role::Defender);
        assert_eq!(p0.speed(), cfg.defender_speed);
        assert_eq!(p1.role(), Role::Attacker);
        assert_eq!(p1.speed(), cfg.attacker_speed);
        assert_eq!(p0.position(), Vec2::new(100.0, 300.0));
        assert_eq!(p1.position(), Vec2::new(700.0, 300.0));
    }

    #[test]
    fn move_displaces_by_speed_over_tick_rate() {
        let cfg = cfg();
        let mut p1 = Player::new(1, &cfg);
        let start = p1.position();
        p1.move_in(Direction::Left);
        // 180 px/s at 60 Hz.
        assert_eq!(p1.position(), start + Vec2::new(-3.0, 0.0));
        p1.move_in(Direction::Up);
        assert_eq!(p1.position(), start + Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn moves_never_leave_the_arena() {
        let cfg = cfg();
        let mut p = Player::new(0, &cfg);
        let pattern = [
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Down,
            Direction::Right,
        ];
        for i in 0..2000 {
            let dir = if i < 1000 {
                pattern[i % 3]
            } else {
                pattern[3 + i % 2]
            };
            p.move_in(dir);
            assert!(p.position().within(cfg.arena), "escaped at {:?}", p.position());
        }
        assert_eq!(p.position(), cfg.arena);
    }

    #[test]
    fn swap_role_recomputes_speed() {
        let cfg = cfg();
        let mut p = Player::new(0, &cfg);
        p.swap_role();
        assert_eq!(p.role(), Role::Attacker);
        assert_eq!(p.speed(), cfg.attacker_speed);
        p.swap_role();
        assert_eq!(p.role(), Role::Defender);
        assert_eq!(p.speed(), cfg.defender_speed);
    }

    #[test]
    fn reset_keeps_role_and_score() {
        let cfg = cfg();
        let mut p = Player::new(1, &cfg);
        p.move_in(Direction::Down);
        p.swap_role();
        p.award_point();
        p.reset();
        assert_eq!(p.position(), cfg.initial_positions[1]);
        assert_eq!(p.role(), Role::Defender);
        assert_eq!(p.speed(), cfg.defender_speed);
        assert_eq!(p.score(), 1);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert!("north".parse::<Direction>().is_err());
    }
}
