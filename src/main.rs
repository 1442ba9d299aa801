//! Terminal runner (default binary).
//!
//! Reads held directions from crossterm key events, advances the game at a
//! fixed step and renders through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{error, info};

use blockfall::app::{App, Flow};
use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::InputHandler;
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config.log_file)?;

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    info!("starting blockfall (seed {seed})");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("game loop failed: {err:?}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let release_timeout = if term.key_release_events() {
        None
    } else {
        config.key_release_timeout()
    };
    info!(
        "key release events: {}, auto-release: {:?}",
        term.key_release_events(),
        release_timeout
    );

    let game = GameState::with_timing(seed, config.timing.to_timing());
    let input = InputHandler::new().with_key_release_timeout_ms(release_timeout);
    let mut app = App::new(game, input, config.timing.tick_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(u64::from(app.tick_ms()));
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            app.game().snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) == Flow::Quit {
                        info!("quit after {} ms of play", app.game().elapsed_ms());
                        return Ok(());
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick();
            dirty = true;
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
