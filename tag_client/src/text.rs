//! Headless text renderer.
//!
//! Lays each scene out as lines of text instead of pixels. A frame is logged
//! only when its content changes, so a steady menu does not flood the log.

use tag_shared::{
    render::RenderBackend,
    view::{GameView, PlayerView},
};
use tracing::debug;

pub const WINDOW_CAPTION: &str = "Chase Tag";

/// Renders scenes to text lines.
#[derive(Debug, Default)]
pub struct TextRenderer {
    caption: String,
    frame: Vec<String>,
    frames_rendered: u64,
}

impl TextRenderer {
    /// Window caption with the measured frame rate.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Lines of the most recent frame.
    pub fn frame(&self) -> &[String] {
        &self.frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn present(&mut self, view: &GameView, lines: Vec<String>) {
        self.caption = format!("{WINDOW_CAPTION} - FPS: {:.2}", view.fps);
        self.frames_rendered += 1;
        if lines != self.frame {
            debug!(scene = ?view.scene, frame = %lines.join(" | "), "Frame changed");
            self.frame = lines;
        }
    }

    fn play_lines(view: &GameView) -> Vec<String> {
        let [a, b] = &view.players;
        let mut lines = vec![
            format!("{} {} | {} {}", a.name(), a.score, b.name(), b.score),
            format!(
                "Round {:.2}s [{:>3.0}%] attacker: {}",
                view.round_seconds(),
                view.round_fraction() * 100.0,
                view.attacker().name()
            ),
        ];
        lines.extend(view.players.iter().map(player_line));
        lines
    }
}

fn player_line(p: &PlayerView) -> String {
    format!(
        "{:<7} {} @ ({:.0}, {:.0})",
        p.name(),
        p.role.label(),
        p.position.x,
        p.position.y
    )
}

impl RenderBackend for TextRenderer {
    fn render_menu(&mut self, view: &GameView) {
        self.present(view, vec!["Press [space] to start ...".to_string()]);
    }

    fn render_play(&mut self, view: &GameView) {
        let lines = Self::play_lines(view);
        self.present(view, lines);
    }

    fn render_pause(&mut self, view: &GameView) {
        let mut lines = Self::play_lines(view);
        lines.push("Game Paused. Press Enter to continue".to_string());
        self.present(view, lines);
    }

    fn render_endgame(&mut self, view: &GameView) {
        let headline = match view.winner() {
            Some(p) => format!("Game Over {} Wins", p.name()),
            None => "Game Over Draw".to_string(),
        };
        let [a, b] = &view.players;
        let lines = vec![
            headline,
            format!("{} {} | {} {}", a.name(), a.score, b.name(), b.score),
        ];
        self.present(view, lines);
    }
}
