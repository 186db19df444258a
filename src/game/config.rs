use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_DURATION_MS: u64 = 60_000;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_GAME_OVER_HOLD_MS: u64 = 3_500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_duration_ms: u64,
    pub tick_interval_ms: u64,
    /// How long the end-of-game message stays up before the next round.
    pub game_over_hold_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_duration_ms: DEFAULT_INITIAL_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            game_over_hold_ms: DEFAULT_GAME_OVER_HOLD_MS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_duration_ms > 0,
            "initial_duration_ms must be positive"
        );
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
        ensure!(
            self.tick_interval_ms <= self.initial_duration_ms,
            "tick_interval_ms ({}) exceeds initial_duration_ms ({})",
            self.tick_interval_ms,
            self.initial_duration_ms
        );
        Ok(())
    }
}
