//! Map layout loader.
//!
//! A layout file holds one row of terrain glyphs per line. Blank lines are
//! ignored. Actors and items are placed separately, via scenario files.

use std::path::Path;

use gravesite_core::GameMap;

use crate::layout::parse_layout;
use crate::loaders::{LoadResult, read_file};

/// Loader for text map layouts.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a layout file. The map is named after the file stem.
    pub fn load(path: &Path) -> LoadResult<GameMap> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("Unnamed");
        Self::load_named(name, path)
    }

    pub fn load_named(name: &str, path: &Path) -> LoadResult<GameMap> {
        let content = read_file(path)?;
        let rows: Vec<&str> = content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        parse_layout(name, &rows)
            .map_err(|e| anyhow::anyhow!("Failed to parse map layout {}: {}", path.display(), e))
    }
}
