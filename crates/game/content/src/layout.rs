//! Text layouts: one string per row, one glyph per location.

use gravesite_core::GameMap;

use crate::catalog::ground_for_glyph;
use crate::error::ContentError;

/// Builds a map from rows of terrain glyphs using the catalog legend.
///
/// Rows must share a width; the map itself rejects ragged or empty layouts.
pub fn parse_layout<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<GameMap, ContentError> {
    let grid = rows
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.as_ref()
                .chars()
                .enumerate()
                .map(|(column, glyph)| {
                    ground_for_glyph(glyph)
                        .ok_or(ContentError::UnknownGlyph { glyph, row, column })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameMap::new(name, grid)?)
}
