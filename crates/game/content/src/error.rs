//! Errors raised while turning content into a playable map.

use gravesite_core::{ErrorSeverity, GameError, MapError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A layout character has no terrain in the legend.
    #[error("unknown terrain glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },

    #[error(transparent)]
    Map(#[from] MapError),
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ContentError::UnknownGlyph { .. } => ErrorSeverity::Validation,
            ContentError::Map(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ContentError::UnknownGlyph { .. } => "CONTENT_UNKNOWN_GLYPH",
            ContentError::Map(error) => error.error_code(),
        }
    }
}
