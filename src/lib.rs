//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core,input,term,types}` and
//! holds the application layer: configuration, logging and the loop glue.

pub mod app;
pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
