//! Game configuration loader.

use std::path::Path;

use gravesite_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        tracing::debug!(
            path = %path.display(),
            seed = config.seed,
            turn_limit = config.turn_limit,
            "config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "seed = 42\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.turn_limit, GameConfig::DEFAULT_TURN_LIMIT);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let error = ConfigLoader::load(&path).unwrap_err();

        assert!(error.to_string().contains("absent.toml"));
    }
}
