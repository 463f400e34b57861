//! Terminal falling-block game runner.
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_blockfall::term`. Each frame renders, waits for input until the next
//! tick is due, and then feeds elapsed time to the session's gravity timer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_blockfall::config::Config;
use tui_blockfall::core::GameSession;
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::logging;
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameCommand, TICK_MS};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.resolved_seed();
    info!(seed, gravity_ms = config.gravity_ms, "starting session");

    let mut session = GameSession::with_gravity(seed, config.gravity_ms);
    if config.autostart {
        session.apply(GameCommand::StartOrPause);
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let applied = session.apply(command);
                        debug!(command = command.as_str(), applied, "command");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms);
        }

        if let Some(event) = session.take_last_event() {
            debug!(
                lines = event.lines_cleared,
                awarded = event.score_awarded,
                score = session.score(),
                "lock"
            );
            if event.game_over {
                info!(score = session.score(), "game over, press r to restart");
            }
        }
    }
}
