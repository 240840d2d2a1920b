//! Simulation engine.
//!
//! The authoritative owner of game state: the scene stack, both players and
//! the two countdown timers. It is a bus [`Listener`] and the only place
//! scene transitions, role swaps and scoring are decided.
//!
//! Determinism notes:
//! - Timers count ticks, never wall-clock time.
//! - The match timer triggers only on the exact step to zero, so every tick
//!   must be delivered.

use std::time::Instant;

use tag_shared::{
    config::GameConfig,
    event::{Event, Listener, Outbox, SceneChange},
    player::{Player, PlayerId, Role},
    scene::{Scene, SceneStack},
    view::{GameView, PlayerView, ViewSource},
};
use tracing::{debug, info};

use crate::clock::FrameClock;

/// Game engine state.
pub struct SimulationEngine {
    cfg: GameConfig,
    scenes: SceneStack,
    players: [Player; 2],
    /// Ticks left in the match.
    game_timer: u32,
    /// Ticks left until the next role swap.
    round_timer: u32,
    running: bool,
    clock: FrameClock,
}

impl SimulationEngine {
    /// Creates an engine with an empty scene stack. Post `Initialize` to start.
    pub fn new(cfg: GameConfig) -> Self {
        let players = [Player::new(0, &cfg), Player::new(1, &cfg)];
        Self {
            game_timer: cfg.game_length,
            round_timer: cfg.round_length,
            cfg,
            scenes: SceneStack::default(),
            players,
            running: true,
            clock: FrameClock::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    /// Current scene, `None` once the stack has emptied.
    pub fn scene(&self) -> Option<Scene> {
        self.scenes.peek()
    }

    pub fn scene_depth(&self) -> usize {
        self.scenes.len()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn game_timer(&self) -> u32 {
        self.game_timer
    }

    pub fn round_timer(&self) -> u32 {
        self.round_timer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    fn initialize(&mut self) {
        self.game_timer = self.cfg.game_length;
        self.round_timer = self.cfg.round_length;
        self.players = [Player::new(0, &self.cfg), Player::new(1, &self.cfg)];
        self.scenes.push(Scene::Menu);
        info!(
            game_length = self.game_timer,
            round_length = self.round_timer,
            "Game initialized"
        );
    }

    fn on_tick(&mut self, outbox: &mut Outbox) {
        self.clock.mark(Instant::now());
        match self.scenes.peek() {
            Some(Scene::Menu) => self.update_menu(),
            Some(Scene::Play) => self.update_play(outbox),
            Some(Scene::EndGame) => self.update_endgame(),
            Some(Scene::Pause) | None => {}
        }
    }

    /// Menu has no simulated objects yet.
    fn update_menu(&mut self) {}

    /// The scoreboard is static once the match is over.
    fn update_endgame(&mut self) {}

    fn update_play(&mut self, outbox: &mut Outbox) {
        if self.game_timer > 0 {
            self.game_timer -= 1;
            if self.game_timer == 0 {
                info!("Match time is up");
                outbox.post(Event::RoundTimesUp);
            }
        }

        self.round_timer = self.round_timer.saturating_sub(1);
        if self.round_timer == 0 {
            self.round_timer = self.cfg.round_length;
            self.switch_roles();
        }

        self.resolve_collision();
    }

    fn switch_roles(&mut self) {
        for player in &mut self.players {
            player.swap_role();
        }
        info!(
            attacker = self.attacker_id(),
            game_timer = self.game_timer,
            "Roles switched"
        );
    }

    fn attacker_id(&self) -> PlayerId {
        if self.players[0].role() == Role::Attacker {
            0
        } else {
            1
        }
    }

    fn distance_sq_between_players(&self) -> f32 {
        self.players[0]
            .position()
            .distance_sq(self.players[1].position())
    }

    /// On contact the non-attacking player scores and both respawn.
    fn resolve_collision(&mut self) {
        let reach = 2.0 * self.cfg.player_radius;
        if self.distance_sq_between_players() > reach * reach {
            return;
        }

        let scorer = if self.players[0].role() == Role::Attacker {
            1
        } else {
            0
        };
        self.players[scorer].award_point();
        for player in &mut self.players {
            player.reset();
        }
        info!(
            scorer,
            scores = ?[self.players[0].score(), self.players[1].score()],
            "Point scored"
        );
    }

    fn change_scene(&mut self, change: SceneChange, outbox: &mut Outbox) {
        match change {
            SceneChange::Pop => {
                let popped = self.scenes.pop();
                debug!(?popped, top = ?self.scenes.peek(), "Scene popped");
                if self.scenes.is_empty() {
                    info!("Scene stack empty, quitting");
                    outbox.post(Event::Quit);
                }
            }
            SceneChange::Push(scene) => {
                self.scenes.push(scene);
                debug!(?scene, depth = self.scenes.len(), "Scene pushed");
            }
        }
    }
}

impl Listener for SimulationEngine {
    fn notify(&mut self, event: &Event, outbox: &mut Outbox) {
        match *event {
            Event::Initialize => self.initialize(),
            Event::Tick { .. } => self.on_tick(outbox),
            Event::SceneChange(change) => self.change_scene(change, outbox),
            Event::Quit => {
                self.running = false;
                info!("Engine stopped");
            }
            Event::PlayerMove {
                player_id,
                direction,
            } => self.players[player_id].move_in(direction),
            Event::RoundTimesUp => {
                self.scenes.push(Scene::EndGame);
            }
        }
    }
}

impl ViewSource for SimulationEngine {
    fn view(&self) -> GameView {
        GameView {
            scene: self.scenes.peek(),
            players: [
                PlayerView::from(&self.players[0]),
                PlayerView::from(&self.players[1]),
            ],
            round_timer: self.round_timer,
            game_timer: self.game_timer,
            round_length: self.cfg.round_length,
            tick_rate: self.cfg.tick_rate,
            fps: self.clock.fps(),
        }
    }
}
