//! Error classification shared by every gravesite crate.
//!
//! Resolving a turn never fails: "no action" is `None` and an empty flask is
//! just a message. Errors come from assembling the world ([`crate::MapError`])
//! and from asking the engine to run a turn it cannot run
//! ([`crate::TurnError`]). Each enum lives next to the code raising it and
//! implements [`GameError`] so callers can pick a log level and a stable code.

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected during play; the same request may work elsewhere or later.
    Recoverable,
    /// Bad input that will keep failing until it changes.
    Validation,
    /// Map bookkeeping disagrees with itself.
    Internal,
}

impl ErrorSeverity {
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier, e.g. `MAP_OCCUPIED`.
    fn error_code(&self) -> &'static str;
}
