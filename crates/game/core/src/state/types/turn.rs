use std::collections::BTreeMap;

use super::EntityId;
use crate::action::Action;

/// Turn bookkeeping for the sequential turn loop.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TurnState {
    /// Completed rounds (every actor acted once, then the world ticked).
    pub round: u64,

    /// Sequential action identifier that increments with every action executed.
    /// Feeds the random oracle so each action draws from a fresh stream.
    pub nonce: u64,

    /// Continuations yielded by multi-turn actions, consumed before the
    /// actor's next decision.
    pending: BTreeMap<EntityId, Action>,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, actor: EntityId, action: Action) {
        self.pending.insert(actor, action);
    }

    pub fn take_pending(&mut self, actor: EntityId) -> Option<Action> {
        self.pending.remove(&actor)
    }

    pub fn pending(&self, actor: EntityId) -> Option<&Action> {
        self.pending.get(&actor)
    }

    pub fn clear_pending(&mut self, actor: EntityId) {
        self.pending.remove(&actor);
    }
}
