//! Logger setup for the terminal binary.
//!
//! The game owns the alternate screen, so log records go to a file instead
//! of stderr. The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

pub fn init(log_path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("logger already initialized")?;

    Ok(())
}
