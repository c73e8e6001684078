//! Terminal snake runner (default binary).
//!
//! Reads configuration from the environment, then runs the game on the
//! terminal using crossterm for input and the framebuffer renderer for output.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};
use simplelog::{Config, WriteLogger};

use tui_snake::engine::{FixedTimestep, GameConfig, GameLoop};
use tui_snake::input::{map_key, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::GameAction;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let geometry = config.geometry().with_context(|| {
        format!(
            "viewport {}x{} px cannot hold a {} px cell",
            config.viewport_width_px, config.viewport_height_px, config.cell_size_px
        )
    })?;
    let seed = config.resolve_seed();
    info!(
        "starting snake: {}x{} grid, {} Hz, seed {}",
        geometry.width(),
        geometry.height(),
        config.tick_hz,
        seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameLoop::new(geometry, seed), config.tick_ms());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("exiting with error: {err:#}");
    }
    result
}

/// Logging is off unless a log file is configured; stdout belongs to the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    WriteLogger::init(config.log_level, Config::default(), file)
        .context("installing logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameLoop, tick_ms: u32) -> Result<()> {
    let view = GameView::new(*game.geometry());
    let mut fb = FrameBuffer::new(0, 0);
    let mut timestep = FixedTimestep::new(tick_ms);
    let mut last = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = Duration::from_millis(timestep.until_next_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} ticks", game.ticks());
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        let applied = game.apply_action(action);
                        // A fresh game gets a full first tick.
                        if applied && action == GameAction::Restart {
                            timestep.reset();
                            last = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Whole milliseconds only; the sub-millisecond remainder stays in `last`.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);

        let due = timestep.advance(elapsed_ms);
        if due == 0 {
            continue;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut canvas = view.begin_frame(&mut fb, Viewport::new(w, h));
        for _ in 0..due {
            game.tick(&mut canvas);
        }
        term.draw_swap(&mut fb)?;
    }
}
