//! Map assembly errors.
//!
//! Errors raised while the external world builder lays out the grid and places
//! actors and items. Turn resolution never produces these.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors that occur while assembling or editing a [`crate::state::GameMap`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// The layout has no rows or no columns.
    #[error("map layout is empty")]
    EmptyLayout,

    /// Rows of the layout have different widths.
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    /// Position is outside the map bounds.
    #[error("position {position:?} is out of bounds (map size: {width}x{height})")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// Position is already occupied by another actor.
    #[error("position {position:?} is already occupied by actor {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    /// The actor's entry policy forbids the ground at the position.
    #[error("actor {actor} cannot stand on the ground at {position:?}")]
    Impassable { actor: EntityId, position: Position },

    /// An actor with the same id is already registered.
    #[error("actor {0} is already registered")]
    DuplicateActor(EntityId),

    /// No actor with this id is registered.
    #[error("actor {0} is not registered")]
    UnknownActor(EntityId),

    /// The actor is registered but not standing anywhere.
    #[error("actor {0} is not on the map")]
    NotOnMap(EntityId),
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        use MapError::*;
        match self {
            // The same request may succeed on another tile
            Occupied { .. } | Impassable { .. } => ErrorSeverity::Recoverable,

            EmptyLayout
            | RaggedRow { .. }
            | OutOfBounds { .. }
            | DuplicateActor(_)
            | UnknownActor(_) => ErrorSeverity::Validation,

            NotOnMap(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MapError::*;
        match self {
            EmptyLayout => "MAP_EMPTY_LAYOUT",
            RaggedRow { .. } => "MAP_RAGGED_ROW",
            OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
            Occupied { .. } => "MAP_OCCUPIED",
            Impassable { .. } => "MAP_IMPASSABLE",
            DuplicateActor(_) => "MAP_DUPLICATE_ACTOR",
            UnknownActor(_) => "MAP_UNKNOWN_ACTOR",
            NotOnMap(_) => "MAP_NOT_ON_MAP",
        }
    }
}
