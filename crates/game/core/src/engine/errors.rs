//! Error types for driving a single actor's turn.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Why [`GameEngine::play_turn`](super::GameEngine::play_turn) refused to run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// No actor with this id is registered.
    #[error("actor {0} is not registered")]
    UnknownActor(EntityId),

    /// The actor is registered but no longer stands on the map.
    #[error("actor {0} is not on the map")]
    NotOnMap(EntityId),

    /// The actor has been knocked out.
    #[error("actor {0} is unconscious")]
    Unconscious(EntityId),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::UnknownActor(_) => ErrorSeverity::Validation,
            TurnError::NotOnMap(_) | TurnError::Unconscious(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::UnknownActor(_) => "TURN_UNKNOWN_ACTOR",
            TurnError::NotOnMap(_) => "TURN_NOT_ON_MAP",
            TurnError::Unconscious(_) => "TURN_UNCONSCIOUS",
        }
    }
}
