//! Key mapping from terminal events to game input.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A direction that stays active while the key is held.
    Hold(Direction),
    /// Start a new session (only honored after game over).
    Restart,
}

/// Map a key code to a game input. Unknown keys map to `None`.
pub fn map_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyAction::Hold(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyAction::Hold(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyAction::Hold(Direction::Down))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyAction::Hold(Direction::Rotate))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
