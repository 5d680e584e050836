use crate::action::{Action, ActionOutcome, ActionTransition, display_name};
use crate::env::Dice;
use crate::state::{Actor, EntityId, GameMap};

/// Rest action - actor passes `turns` consecutive turns.
///
/// Each execution covers one turn and yields the remainder as a
/// continuation, so the engine keeps the actor resting without asking for a
/// new decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestAction {
    pub turns: u32,
}

impl RestAction {
    pub fn new(turns: u32) -> Self {
        Self {
            turns: turns.max(1),
        }
    }
}

impl ActionTransition for RestAction {
    fn execute(&self, actor: EntityId, map: &mut GameMap, _dice: &mut Dice<'_>) -> ActionOutcome {
        let outcome = ActionOutcome::done(format!("{} rests", display_name(map, actor)));
        if self.turns > 1 {
            outcome.then(Action::Rest(RestAction::new(self.turns - 1)))
        } else {
            outcome
        }
    }

    fn menu_description(&self, actor: &Actor, _map: &GameMap) -> String {
        match self.turns {
            1 => format!("{actor} rests for a turn"),
            turns => format!("{actor} rests for {turns} turns"),
        }
    }
}
