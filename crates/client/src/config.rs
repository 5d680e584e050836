//! Driver configuration from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use gravesite_content::ConfigLoader;
use gravesite_core::GameConfig;

/// Headless driver configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub game: GameConfig,
    /// RON scenario to play instead of the built-in Gravesite Plain.
    pub scenario: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GRAVESITE_CONFIG` - TOML file with a [`GameConfig`] (optional)
    /// - `GRAVESITE_SEED` - overrides the seed
    /// - `GRAVESITE_TURNS` - overrides the number of rounds to play
    /// - `GRAVESITE_SCENARIO` - RON scenario file (optional)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("GRAVESITE_CONFIG") {
            config.game = ConfigLoader::load(&path)
                .with_context(|| format!("GRAVESITE_CONFIG points at {}", path.display()))?;
        }
        if let Some(seed) = read_env::<u64>("GRAVESITE_SEED") {
            config.game.seed = seed;
        }
        if let Some(turns) = read_env::<u32>("GRAVESITE_TURNS") {
            config.game.turn_limit = turns;
        }
        config.scenario = read_env::<PathBuf>("GRAVESITE_SCENARIO");

        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    let parsed = value.parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, %value, "ignoring unparsable environment variable");
    }
    parsed
}
