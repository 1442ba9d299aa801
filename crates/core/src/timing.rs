//! Difficulty model: elapsed play time to drop interval.
//!
//! `speed_factor = 1 + elapsed / SPEEDUP_PERIOD_MS` and the drop interval is
//! `INITIAL / speed_factor`, truncated to whole milliseconds and floored at
//! the minimum.

use crate::types::{
    INITIAL_DROP_INTERVAL_MS, MIN_DROP_INTERVAL_MS, MOVE_COOLDOWN_MS, SPEEDUP_PERIOD_MS,
};

/// Timing parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub initial_drop_ms: u32,
    pub min_drop_ms: u32,
    pub move_cooldown_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            initial_drop_ms: INITIAL_DROP_INTERVAL_MS,
            min_drop_ms: MIN_DROP_INTERVAL_MS,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
        }
    }
}

impl Timing {
    /// Drop interval after `elapsed_ms` of play.
    pub fn drop_interval_ms(&self, elapsed_ms: u64) -> u32 {
        let speed_factor = 1.0 + elapsed_ms as f64 / f64::from(SPEEDUP_PERIOD_MS);
        let interval = (f64::from(self.initial_drop_ms) / speed_factor) as u32;
        interval.max(self.min_drop_ms)
    }
}

/// Drop interval with the default timing.
pub fn drop_interval_ms(elapsed_ms: u64) -> u32 {
    Timing::default().drop_interval_ms(elapsed_ms)
}
