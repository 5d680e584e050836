//! Scenario loader.

use std::path::Path;

use gravesite_core::{GameError, GameMap};

use crate::loaders::{LoadResult, read_file};
use crate::scenario::ScenarioSpec;

/// Loader for scenarios described in RON.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    /// Load a scenario and build its starting map.
    pub fn load_map(path: &Path) -> LoadResult<GameMap> {
        let spec = Self::load(path)?;
        let map = spec.build().map_err(|e| {
            anyhow::anyhow!(
                "Failed to build scenario {}: [{}] {}",
                spec.name,
                e.error_code(),
                e
            )
        })?;
        tracing::info!(scenario = %spec.name, path = %path.display(), "scenario loaded");
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravesite_core::{EntityId, Position};
    use std::fs;
    use tempfile::TempDir;

    const ARENA: &str = r#"(
        name: "Arena",
        layout: [
            "....",
            "..~.",
        ],
        actors: [
            (kind: FurnaceGolem, at: (3, 1)),
            (kind: Tarnished, at: (0, 0)),
        ],
        items: [
            (kind: FlaskOfHealing, at: (1, 1)),
        ],
    )"#;

    #[test]
    fn ron_scenario_builds_a_map() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("arena.ron");
        fs::write(&path, ARENA).unwrap();

        let map = ScenarioLoader::load_map(&path).unwrap();

        assert_eq!(map.name(), "Arena");
        assert_eq!(map.location_of(EntityId::PLAYER), Some(Position::new(0, 0)));
        assert_eq!(map.location_of(EntityId(1)), Some(Position::new(3, 1)));
        assert_eq!(map.at(Position::new(1, 1)).unwrap().items().len(), 1);
    }

    #[test]
    fn overlapping_actors_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crowded.ron");
        fs::write(
            &path,
            r#"(
                name: "Crowded",
                layout: [".."],
                actors: [
                    (kind: Tarnished, at: (0, 0)),
                    (kind: FurnaceGolem, at: (0, 0)),
                ],
            )"#,
        )
        .unwrap();

        let error = ScenarioLoader::load_map(&path).unwrap_err();

        let message = error.to_string();
        assert!(message.contains("[MAP_OCCUPIED]"));
        assert!(message.contains("already occupied"));
    }
}
