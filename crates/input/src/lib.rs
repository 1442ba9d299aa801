//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into logical [`crate::types::Direction`]s and
//! commands, and tracks which directions are currently held so the game loop
//! can read one consistent snapshot per tick (including on terminals without
//! key-release events).

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit, KeyAction};
