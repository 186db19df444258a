use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    pub game: GameConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Time Fighter".to_string(),
            window_width: 480,
            window_height: 640,
            game: GameConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_ron(&source)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(target: "engine", path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_ron(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source).context("failed to parse RON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be non-zero"
        );
        self.game.validate()
    }
}
