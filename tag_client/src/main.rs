//! Headless game binary.
//!
//! Usage:
//!   cargo run -p tag_client -- [--config game.json] [--tick-rate 60]
//!
//! Keys are typed on stdin, one per line:
//!   space          - Start the match from the menu
//!   p / enter      - Pause / resume
//!   w a s d        - Move player 0 (Green)
//!   up down left right - Move player 1 (Magenta)
//!   esc            - Leave the current scene (quits from the menu)
//!   quit           - Exit immediately
//!
//! Set `RUST_LOG=debug` to see every rendered frame.

use std::{
    cell::RefCell,
    env,
    io::{BufRead, Write},
    path::PathBuf,
    rc::Rc,
};

use anyhow::Context;
use tag_client::{input::Key, text::TextRenderer, Controller, View};
use tag_engine::GameLoop;
use tag_shared::{config::GameConfig, view::ViewSource};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    tick_rate: Option<u32>,
}

fn parse_args() -> Args {
    let mut out = Args::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                out.config = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--tick-rate" if i + 1 < args.len() => {
                out.tick_rate = args[i + 1].parse().ok();
                i += 2;
            }
            _ => i += 1,
        }
    }
    out
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut cfg = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(hz) = args.tick_rate {
        cfg.tick_rate = hz;
    }
    cfg.validate().context("invalid game config")?;
    Ok(cfg)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args();
    let cfg = load_config(&args)?;
    info!(
        tick_rate = cfg.tick_rate,
        arena = ?cfg.arena,
        game_length = cfg.game_length,
        round_length = cfg.round_length,
        "Starting game"
    );

    let mut game = GameLoop::new(cfg);
    let engine = game.engine();

    // Registration order: engine, then input, then rendering.
    let (key_tx, key_rx) = mpsc::channel::<Key>(32);
    game.register(Rc::new(RefCell::new(Controller::new(engine.clone(), key_rx))));
    let view = Rc::new(RefCell::new(View::new(engine.clone(), TextRenderer::default())));
    game.register(view.clone());

    // Spawn stdin reader thread.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            print!("> ");
            let _ = stdout.flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            match line.parse::<Key>() {
                Ok(key) => {
                    if key_tx.blocking_send(key).is_err() {
                        break;
                    }
                }
                Err(e) => debug!(error = %e, "Input ignored"),
            }
        }
    });

    println!("Type 'space' to start, 'p' to pause, 'quit' to exit.");
    println!();

    let ticks = game.run().await;

    let summary = engine.borrow().view();
    info!(
        ticks,
        frames = view.borrow().backend().frames_rendered(),
        summary = %serde_json::to_string(&summary).context("serialize final view")?,
        "Session ended"
    );
    Ok(())
}
