//! Runtime configuration loaded from a TOML file.
//!
//! Lookup order: the path in `BLOCKFALL_CONFIG`, then `blockfall.toml` in the
//! working directory. A missing file means defaults; a malformed or invalid
//! one is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Timing;
use crate::types::{
    key_release_timeout_ms, INITIAL_DROP_INTERVAL_MS, MIN_DROP_INTERVAL_MS, MOVE_COOLDOWN_MS,
    TICK_MS,
};

/// Environment variable overriding the config file path.
pub const CONFIG_ENV_VAR: &str = "BLOCKFALL_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "blockfall.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Piece RNG seed; derived from the clock when absent.
    pub seed: Option<u32>,
    pub log_file: PathBuf,
    pub timing: TimingConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_ms: u32,
    pub initial_drop_ms: u32,
    pub min_drop_ms: u32,
    pub move_cooldown_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Auto-release for terminals without key-release events. 0 disables it;
    /// absent means the move cooldown rounded up to whole ticks.
    pub key_release_timeout_ms: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: PathBuf::from("blockfall.log"),
            timing: TimingConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            initial_drop_ms: INITIAL_DROP_INTERVAL_MS,
            min_drop_ms: MIN_DROP_INTERVAL_MS,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
        }
    }
}

impl TimingConfig {
    pub fn to_timing(self) -> Timing {
        Timing {
            initial_drop_ms: self.initial_drop_ms,
            min_drop_ms: self.min_drop_ms,
            move_cooldown_ms: self.move_cooldown_ms,
        }
    }
}

impl Config {
    /// Parse and validate TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("invalid config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Auto-release timeout for held directions, `None` when disabled.
    pub fn key_release_timeout(&self) -> Option<u32> {
        let timeout = self.input.key_release_timeout_ms.unwrap_or_else(|| {
            key_release_timeout_ms(self.timing.move_cooldown_ms, self.timing.tick_ms)
        });
        (timeout > 0).then_some(timeout)
    }

    /// Load from the configured location (see module docs).
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.timing;
        if t.tick_ms == 0 {
            bail!("timing.tick_ms must be greater than 0");
        }
        if t.min_drop_ms == 0 {
            bail!("timing.min_drop_ms must be greater than 0");
        }
        if t.min_drop_ms > t.initial_drop_ms {
            bail!(
                "timing.min_drop_ms ({}) must not exceed timing.initial_drop_ms ({})",
                t.min_drop_ms,
                t.initial_drop_ms
            );
        }
        Ok(())
    }
}

/// Path of the config file to read.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.timing.tick_ms, 16);
        assert_eq!(config.timing.to_timing(), Timing::default());
        assert_eq!(config.key_release_timeout(), Some(112));
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("seed = 7\n[timing]\nmin_drop_ms = 80\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.timing.min_drop_ms, 80);
        assert_eq!(config.timing.initial_drop_ms, 500);
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn zero_timeout_disables_auto_release() {
        let config = Config::from_toml_str("[input]\nkey_release_timeout_ms = 0\n").unwrap();
        assert_eq!(config.key_release_timeout(), None);
    }

    #[test]
    fn auto_release_follows_configured_cooldown() {
        let config =
            Config::from_toml_str("[timing]\ntick_ms = 20\nmove_cooldown_ms = 150\n").unwrap();
        assert_eq!(config.key_release_timeout(), Some(160));

        let config = Config::from_toml_str("[input]\nkey_release_timeout_ms = 90\n").unwrap();
        assert_eq!(config.key_release_timeout(), Some(90));
    }

    #[test]
    fn rejects_min_above_initial() {
        let err = Config::from_toml_str("[timing]\ninitial_drop_ms = 40\nmin_drop_ms = 50\n")
            .unwrap_err();
        assert!(err.to_string().contains("min_drop_ms"));
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(Config::from_toml_str("[timing]\ntick_ms = 0\n").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(Config::from_toml_str("seed = \"not a number\"").is_err());
    }
}
