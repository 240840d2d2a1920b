//! Configuration system.
//!
//! Gameplay constants for a session. They are fixed for the lifetime of a
//! session; the binary may load them from a JSON file at startup.

use std::{path::Path, time::Duration};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Root configuration for the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed simulation tick rate (frames per second).
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    /// Arena extents in pixels (width, height).
    #[serde(default = "default_arena")]
    pub arena: Vec2,
    /// Collision radius of a player in pixels.
    #[serde(default = "default_player_radius")]
    pub player_radius: f32,
    /// Speed of the attacking player in pixels per second.
    #[serde(default = "default_attacker_speed")]
    pub attacker_speed: f32,
    /// Speed of the defending player in pixels per second.
    #[serde(default = "default_defender_speed")]
    pub defender_speed: f32,
    /// Spawn/reset position per player id.
    #[serde(default = "default_initial_positions")]
    pub initial_positions: [Vec2; 2],
    /// Match length in ticks.
    #[serde(default = "default_game_length")]
    pub game_length: u32,
    /// Ticks between role swaps.
    #[serde(default = "default_round_length")]
    pub round_length: u32,
}

fn default_tick_rate() -> u32 {
    60
}

fn default_arena() -> Vec2 {
    Vec2::new(800.0, 600.0)
}

fn default_player_radius() -> f32 {
    20.0
}

fn default_attacker_speed() -> f32 {
    180.0
}

fn default_defender_speed() -> f32 {
    150.0
}

fn default_initial_positions() -> [Vec2; 2] {
    [Vec2::new(100.0, 300.0), Vec2::new(700.0, 300.0)]
}

fn default_game_length() -> u32 {
    3600
}

fn default_round_length() -> u32 {
    60
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            arena: default_arena(),
            player_radius: default_player_radius(),
            attacker_speed: default_attacker_speed(),
            defender_speed: default_defender_speed(),
            initial_positions: default_initial_positions(),
            game_length: default_game_length(),
            round_length: default_round_length(),
        }
    }
}

impl GameConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = Self::from_json_str(&raw)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects constants the simulation cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.tick_rate > 0, "tick_rate must be positive");
        ensure!(self.game_length > 0, "game_length must be positive");
        ensure!(self.round_length > 0, "round_length must be positive");
        ensure!(
            self.arena.x > 0.0 && self.arena.y > 0.0,
            "arena extents must be positive, got {:?}",
            self.arena
        );
        ensure!(self.player_radius >= 0.0, "player_radius must not be negative");
        ensure!(
            self.attacker_speed >= 0.0 && self.defender_speed >= 0.0,
            "speeds must not be negative"
        );
        for (id, pos) in self.initial_positions.iter().enumerate() {
            ensure!(
                pos.within(self.arena),
                "initial position of player {id} {pos:?} lies outside the arena"
            );
        }
        Ok(())
    }

    /// Wall-clock length of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = GameConfig::from_json_str(r#"{ "tick_rate": 30, "round_length": 90 }"#).unwrap();
        assert_eq!(cfg.tick_rate, 30);
        assert_eq!(cfg.round_length, 90);
        assert_eq!(cfg.game_length, 3600);
        assert_eq!(cfg.arena, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn default_config_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn validate_rejects_spawn_outside_arena() {
        let cfg = GameConfig {
            initial_positions: [Vec2::new(100.0, 300.0), Vec2::new(900.0, 300.0)],
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("player 1"));
    }

    #[test]
    fn validate_rejects_zero_round_length() {
        let cfg = GameConfig {
            round_length: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
