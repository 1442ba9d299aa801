//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 13 columns (indexed 0-12)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (5, 0), i.e. `BOARD_WIDTH / 2 - 1` on the top row
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `INITIAL_DROP_INTERVAL_MS` | 500 | Gravity at the start of a session |
//! | `MIN_DROP_INTERVAL_MS` | 50 | Gravity never gets faster than this |
//! | `SPEEDUP_PERIOD_MS` | 60000 | Play time that adds 1 to the speed factor |
//! | `MOVE_COOLDOWN_MS` | 100 | Minimum gap between left/right/rotate actions |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, HeldDirections, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("skew").unwrap();
//! assert_eq!(kind, PieceKind::Skew);
//!
//! let mut held = HeldDirections::empty();
//! held.insert(Direction::Left);
//! assert!(held.contains(Direction::Left));
//! assert!(!held.contains(Direction::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 13);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (13 columns)
pub const BOARD_WIDTH: u8 = 13;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop interval at zero elapsed play time.
pub const INITIAL_DROP_INTERVAL_MS: u32 = 500;

/// Floor for the drop interval.
pub const MIN_DROP_INTERVAL_MS: u32 = 50;

/// Elapsed play time that raises the speed factor by one.
pub const SPEEDUP_PERIOD_MS: u32 = 60_000;

/// Cooldown between applied move-left / move-right / rotate actions.
pub const MOVE_COOLDOWN_MS: u32 = 100;

/// Held directions expire after this long without a press or repeat
/// on terminals that never report key releases.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = key_release_timeout_ms(MOVE_COOLDOWN_MS, TICK_MS);

/// Auto-release timeout for a given cooldown and tick: the cooldown rounded
/// up to whole ticks.
///
/// A tap then stays held long enough for one gated action even when the
/// cooldown has just restarted, and expires before a second one is ready.
pub const fn key_release_timeout_ms(move_cooldown_ms: u32, tick_ms: u32) -> u32 {
    if tick_ms == 0 {
        return move_cooldown_ms;
    }
    move_cooldown_ms.div_ceil(tick_ms) * tick_ms
}

// Every base shape spans at most 4 columns and 4 rows from the spawn anchor.
const _: () = assert!(BOARD_WIDTH >= 9, "board too narrow for the spawn anchor");
const _: () = assert!(BOARD_HEIGHT >= 4, "board too short for the tallest shape");
const _: () = assert!(MIN_DROP_INTERVAL_MS > 0);
const _: () = assert!(MIN_DROP_INTERVAL_MS <= INITIAL_DROP_INTERVAL_MS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(INITIAL_DROP_INTERVAL_MS, 500);
        assert_eq!(MIN_DROP_INTERVAL_MS, 50);
        assert_eq!(SPEEDUP_PERIOD_MS, 60_000);
        assert_eq!(MOVE_COOLDOWN_MS, 100);
    }

    #[test]
    fn key_release_timeout_rounds_cooldown_up_to_ticks() {
        assert_eq!(DEFAULT_KEY_RELEASE_TIMEOUT_MS, 112);
        assert_eq!(key_release_timeout_ms(96, 16), 96);
        assert_eq!(key_release_timeout_ms(80, 20), 80);
        assert_eq!(key_release_timeout_ms(81, 20), 100);
        assert_eq!(key_release_timeout_ms(100, 0), 100);
    }

    #[test]
    fn piece_kind_round_trips_through_index() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(PieceKind::from_index(PieceKind::COUNT), None);
    }

    #[test]
    fn held_directions_insert_remove() {
        let mut held = HeldDirections::empty();
        assert!(held.is_empty());

        held.insert(Direction::Down);
        held.insert(Direction::Rotate);
        assert!(held.contains(Direction::Down));
        assert!(held.contains(Direction::Rotate));
        assert!(!held.contains(Direction::Left));

        held.remove(Direction::Down);
        assert!(!held.contains(Direction::Down));
        assert_eq!(held, HeldDirections::from_iter([Direction::Rotate]));
    }
}

/// The five piece kinds
///
/// Each kind has a fixed base shape (see `blockfall_core::pieces`) and a
/// distinct color in the terminal view:
/// - **Straight**: Blue, four in a row
/// - **Square**: Yellow, 2x2 block
/// - **T**: Purple, three in a row with a stem
/// - **L**: Orange, vertical bar with a foot
/// - **Skew**: Green, S-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Straight,
    Square,
    T,
    L,
    Skew,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 5;

    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::Straight,
        PieceKind::Square,
        PieceKind::T,
        PieceKind::L,
        PieceKind::Skew,
    ];

    /// Catalog index (0-4).
    pub fn index(self) -> usize {
        match self {
            PieceKind::Straight => 0,
            PieceKind::Square => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::Skew => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Straight"), Some(PieceKind::Straight));
    /// assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "straight" => Some(PieceKind::Straight),
            "square" => Some(PieceKind::Square),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "skew" => Some(PieceKind::Skew),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Straight => "straight",
            PieceKind::Square => "square",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::Skew => "skew",
        }
    }
}

/// Logical input directions.
///
/// `Left`, `Right` and `Rotate` are rate limited by the action cooldown;
/// `Down` (soft drop) is applied every tick while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Rotate,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Rotate,
    ];

    fn bit(self) -> u8 {
        match self {
            Direction::Left => 0b0001,
            Direction::Right => 0b0010,
            Direction::Down => 0b0100,
            Direction::Rotate => 0b1000,
        }
    }
}

/// Snapshot of the directions currently held down.
///
/// A small `Copy` bit set so the game loop can take a consistent view of the
/// input once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeldDirections(u8);

impl HeldDirections {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Direction> for HeldDirections {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut held = Self::empty();
        for dir in iter {
            held.insert(dir);
        }
        held
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<PieceKind>;
