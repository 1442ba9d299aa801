//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O or input devices, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 13x20 grid with collision queries and line clearing
//! - [`pieces`]: base shape catalog and the origin rotation
//! - [`piece`]: the active falling piece
//! - [`timing`]: elapsed play time to drop interval
//! - [`game_state`]: the session, its tick loop and Playing / GameOver lifecycle
//! - [`rng`]: seedable random source for piece selection
//! - [`snapshot`]: plain-data view for renderers
//!
//! # Game Rules
//!
//! - **Uniform pieces**: each spawn picks one of five kinds uniformly
//! - **Origin rotation**: (x, y) -> (y, -x) around the piece anchor, no wall kicks
//! - **Instant lock**: a piece locks on the first gravity step it cannot fall
//! - **Speed-up**: gravity gets faster with play time, floored at 50ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Direction, HeldDirections};
//!
//! let mut game = GameState::new(12345);
//!
//! let held: HeldDirections = [Direction::Down].into_iter().collect();
//! game.tick(16, held);
//!
//! assert_eq!(game.active().position().1, 1);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds and the directions currently held. The binary drives
//! it at a fixed 16ms step.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod timing;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent, Phase};
pub use piece::Tetromino;
pub use pieces::{base_shape, rotate_shape, SPAWN_POSITION};
pub use rng::{RandomSource, ScriptedKinds, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timing::{drop_interval_ms, Timing};
