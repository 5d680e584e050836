use std::fmt;

use crate::state::EntityId;

/// One actor's turn within a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub actor: EntityId,
    /// The action's outcome text.
    pub description: String,
    /// The actor still has a continuation queued.
    pub continues: bool,
}

/// Everything that happened during one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: u64,
    pub turns: Vec<TurnRecord>,
    /// Messages from the world tick (fire, items, knock-outs).
    pub world: Vec<String>,
    /// Actors whose turn could not run, with the error code.
    pub skipped: Vec<(EntityId, &'static str)>,
}

impl RoundReport {
    /// All messages in the order they were produced.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.turns
            .iter()
            .map(|turn| turn.description.as_str())
            .chain(self.world.iter().map(String::as_str))
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.messages() {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}
