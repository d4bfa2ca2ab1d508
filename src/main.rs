//! Terminal Life runner (default binary).
//!
//! Runs the simulation in the terminal with crossterm input and a
//! framebuffer-based renderer. With `LIFE_HEADLESS=<generations>` it instead
//! prints that many generations to stdout and exits.

mod logging;

use std::fs;
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_life::core::SimpleRng;
use tui_life::engine::{LifeConfig, LifeGame};
use tui_life::input::{handle_key_event, should_quit, CursorHandler};
use tui_life::term::{
    frame_fingerprint, FrameBuffer, GridView, Overlay, RenderThrottle, TerminalRenderer,
    TextRender, Viewport,
};
use tui_life::types::{LifeAction, FRAME_MS};

/// Redraw at least this often even when nothing changed.
const IDLE_REDRAW_MS: u64 = 1_000;

fn main() -> Result<()> {
    let config = LifeConfig::from_env();
    logging::init(&config)?;

    let mut game = build_game(&config)?;
    info!(
        "board {}x{}, interval {}ms, seed {}",
        game.size(),
        game.size(),
        game.interval_ms(),
        game.seed()
    );

    if let Some(generations) = config.headless_generations {
        return run_headless(&mut game, generations);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn build_game(config: &LifeConfig) -> Result<LifeGame> {
    let seed = config
        .seed
        .unwrap_or_else(|| SimpleRng::from_entropy().seed());
    let mut game = LifeGame::new(config.board_size, seed)
        .context("creating board")?
        .with_interval(config.generation_ms);

    if let Some(path) = &config.pattern_path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading pattern file {}", path.display()))?;
        game.load_pattern(&text)
            .with_context(|| format!("loading pattern file {}", path.display()))?;
    }

    Ok(game)
}

fn run_headless(game: &mut LifeGame, generations: u64) -> Result<()> {
    let stdout = io::stdout();
    let mut out = TextRender::new(stdout.lock());

    game.present(&mut out)?;
    for _ in 0..generations {
        game.step();
        game.present(&mut out)?;
    }

    info!(
        "ran {} generations, final population {}",
        game.generation(),
        game.population()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut LifeGame) -> Result<()> {
    let view = GridView::default();
    let mut cursor = CursorHandler::new(game.size());
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut message: Option<String> = None;

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        {
            let snap = game.snapshot();
            let overlay = Overlay {
                cursor: Some(cursor.index()),
                message: message.as_deref(),
            };
            let now_ms = started.elapsed().as_millis() as u64;
            if throttle.should_render(now_ms, frame_fingerprint(&snap, &overlay, viewport)) {
                view.render_into(&snap, &overlay, viewport, &mut fb);
                term.draw_swap(&mut fb)?;
            }
        }

        // Input with timeout until next tick.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key).or_else(|| cursor.handle_key_press(key.code))
                }
                Event::Mouse(mouse) => {
                    let size = game.size();
                    cursor.handle_mouse(mouse, |x, y| view.hit_test(size, viewport, x, y))
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                apply(game, action, &mut message);
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

fn apply(game: &mut LifeGame, action: LifeAction, message: &mut Option<String>) {
    match game.apply_action(action) {
        Ok(_) => *message = None,
        Err(err) => {
            warn!("{} failed: {err}", action.as_str());
            *message = Some(format!("{}: {err}", action.as_str()));
        }
    }
}
