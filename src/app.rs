//! Glue between terminal key events, the held-direction tracker and the
//! game session. Kept free of terminal I/O so it can be driven from tests.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::{debug, info};

use crate::core::{GameState, LockEvent, RandomSource, SimpleRng};
use crate::input::{should_quit, InputHandler, KeyAction};

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<R = SimpleRng> {
    game: GameState<R>,
    input: InputHandler,
    tick_ms: u32,
}

impl<R: RandomSource> App<R> {
    pub fn new(game: GameState<R>, input: InputHandler, tick_ms: u32) -> Self {
        Self {
            game,
            input,
            tick_ms,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(key) {
                    return Flow::Quit;
                }
                if self.input.handle_key_press(key.code) == Some(KeyAction::Restart) {
                    self.restart();
                }
            }
            KeyEventKind::Release => self.input.handle_key_release(key.code),
        }
        Flow::Continue
    }

    /// Start over, but only from the game-over screen.
    pub fn restart(&mut self) -> bool {
        if !self.game.game_over() {
            return false;
        }
        self.game.reset();
        self.input.reset();
        true
    }

    /// Advance one fixed step using the current held directions.
    pub fn tick(&mut self) -> Option<LockEvent> {
        let held = self.input.update(self.tick_ms);
        let event = self.game.tick(self.tick_ms, held)?;

        if event.lines_cleared > 0 {
            info!(
                "{} line(s) cleared at {} ms",
                event.lines_cleared,
                self.game.elapsed_ms()
            );
        } else {
            debug!("{} locked", event.kind.as_str());
        }
        Some(event)
    }
}
