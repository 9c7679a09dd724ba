//! Terminal falling-block game (default binary).
//!
//! Crossterm drives input and a framebuffer renderer draws the board. Logs
//! go to a file because the terminal is in raw mode while the game runs.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use tui_blockfall::core::{GameConfig, GameSnapshot, GameState};
use tui_blockfall::input::{action_for_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{FALL_DELAY_MS, FRAME_MS};

const DEFAULT_LOG_FILE: &str = "blockfall.log";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = FALL_DELAY_MS)]
    fall_delay_ms: u64,

    /// Write logs to this file (defaults to blockfall.log when RUST_LOG is set)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = match log_file {
        Some(path) => path,
        None if std::env::var_os("RUST_LOG").is_some() => PathBuf::from(DEFAULT_LOG_FILE),
        None => return Ok(()),
    };

    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file)?;

    let mut config = GameConfig::default().with_fall_delay_ms(args.fall_delay_ms);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game_state = GameState::from_config(config);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game_state.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit after {} lines", game_state.lines());
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let delta_ms = last_frame.elapsed().as_millis() as u64;
        if delta_ms >= FRAME_MS {
            last_frame = Instant::now();
            let tick_ms = start.elapsed().as_millis() as u64;
            if let Some(event) = game_state.update(delta_ms, tick_ms) {
                if event.game_over {
                    info!("game over with {} lines", game_state.lines());
                }
            }
        }
    }
}
