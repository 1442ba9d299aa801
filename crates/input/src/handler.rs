//! Held-direction tracker for terminal environments.
//!
//! Key presses add a direction to the held set and key releases remove it.
//! Terminals that never emit release events are handled with a timeout: a
//! direction not refreshed by a press or auto-repeat within the timeout is
//! released on the next [`InputHandler::update`].

use crossterm::event::KeyCode;

use crate::map::{map_key, KeyAction};
use crate::types::{Direction, HeldDirections, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

/// Tracks which directions are held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: HeldDirections,
    /// Milliseconds since each direction was last pressed, indexed like `Direction::ALL`.
    since_press_ms: [u32; 4],
    /// `None` when the terminal reports key releases.
    key_release_timeout_ms: Option<u32>,
}

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::Left => 0,
        Direction::Right => 1,
        Direction::Down => 2,
        Direction::Rotate => 3,
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: HeldDirections::empty(),
            since_press_ms: [0; 4],
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Set the auto-release timeout. `None` relies on release events only.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    /// Record a key press or auto-repeat.
    ///
    /// Returns the mapped action so the caller can react to commands such as
    /// restart; direction keys are also added to the held set.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<KeyAction> {
        let action = map_key(code)?;
        if let KeyAction::Hold(dir) = action {
            self.held.insert(dir);
            self.since_press_ms[slot(dir)] = 0;
        }
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(KeyAction::Hold(dir)) = map_key(code) {
            self.held.remove(dir);
        }
    }

    /// Age the held directions by `elapsed_ms`, expire stale ones, and return
    /// the snapshot for this tick.
    pub fn update(&mut self, elapsed_ms: u32) -> HeldDirections {
        for dir in Direction::ALL {
            if !self.held.contains(dir) {
                continue;
            }
            let age = &mut self.since_press_ms[slot(dir)];
            *age = age.saturating_add(elapsed_ms);
            if self.key_release_timeout_ms.is_some_and(|timeout| *age > timeout) {
                self.held.remove(dir);
            }
        }
        self.held
    }

    /// Current held set without advancing time.
    pub fn held(&self) -> HeldDirections {
        self.held
    }

    pub fn reset(&mut self) {
        self.held = HeldDirections::empty();
        self.since_press_ms = [0; 4];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(None);

        assert_eq!(
            ih.handle_key_press(KeyCode::Left),
            Some(KeyAction::Hold(Direction::Left))
        );
        assert_eq!(
            ih.handle_key_press(KeyCode::Down),
            Some(KeyAction::Hold(Direction::Down))
        );
        let held = ih.update(16);
        assert!(held.contains(Direction::Left));
        assert!(held.contains(Direction::Down));

        ih.handle_key_release(KeyCode::Left);
        let held = ih.update(16);
        assert!(!held.contains(Direction::Left));
        assert!(held.contains(Direction::Down));
    }

    #[test]
    fn test_without_timeout_keys_stay_held() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(None);
        ih.handle_key_press(KeyCode::Right);
        assert!(ih.update(60_000).contains(Direction::Right));
    }

    #[test]
    fn test_auto_release_after_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(Some(50));
        ih.handle_key_press(KeyCode::Left);

        assert!(ih.update(50).contains(Direction::Left));
        assert!(!ih.update(1).contains(Direction::Left));
    }

    #[test]
    fn test_repeat_press_refreshes_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(Some(50));
        ih.handle_key_press(KeyCode::Left);
        ih.update(40);

        ih.handle_key_press(KeyCode::Left);
        assert!(ih.update(40).contains(Direction::Left));
    }

    #[test]
    fn test_non_direction_key_does_not_refresh_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(Some(50));
        ih.handle_key_press(KeyCode::Left);
        ih.update(40);

        assert_eq!(ih.handle_key_press(KeyCode::Char('r')), Some(KeyAction::Restart));
        assert!(!ih.update(20).contains(Direction::Left));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Char('x')), None);
        assert!(ih.held().is_empty());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(None);
        ih.handle_key_press(KeyCode::Up);
        ih.reset();
        assert!(ih.update(0).is_empty());
    }
}
