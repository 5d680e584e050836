//! Behaviour-driven decision making.
//!
//! Each non-player actor carries a [`BehaviourSet`]: behaviours keyed by
//! priority in a [`PrioritySelector`], evaluated lowest key first. The first
//! behaviour that proposes an action decides the actor's turn.
//!
//! Behaviours only read the map. The single exception to "decisions do not
//! change the set" is provocation, which the attack action applies to its
//! target through [`BehaviourSet::provoke`].

mod follow;
mod stomp;
mod wander;

use behavior_tree::{Behavior, Priority, PrioritySelector};

use crate::action::Action;
use crate::config::GameConfig;
use crate::env::Dice;
use crate::state::{EntityId, GameMap};

/// Everything a behaviour may look at while deciding.
pub struct DecisionContext<'a, 'r> {
    pub actor: EntityId,
    pub map: &'a GameMap,
    pub dice: &'a mut Dice<'r>,
}

impl<'a, 'r> DecisionContext<'a, 'r> {
    pub fn new(actor: EntityId, map: &'a GameMap, dice: &'a mut Dice<'r>) -> Self {
        Self { actor, map, dice }
    }
}

/// Closed set of decision strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behaviour {
    /// Step through a random enterable exit.
    Wander,
    /// Step to the first enterable exit that gets closer to `target`.
    Follow { target: EntityId },
    /// Attack `target` with the intrinsic weapon when it stands next to us.
    Stomp { target: EntityId },
}

impl<'a, 'r> Behavior<DecisionContext<'a, 'r>> for Behaviour {
    type Output = Action;

    fn propose(&self, ctx: &mut DecisionContext<'a, 'r>) -> Option<Action> {
        match *self {
            Behaviour::Wander => wander::propose(ctx),
            Behaviour::Follow { target } => follow::propose(ctx, target),
            Behaviour::Stomp { target } => stomp::propose(ctx, target),
        }
    }
}

/// Prioritised behaviours of one actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BehaviourSet {
    selector: PrioritySelector<Behaviour>,
}

impl BehaviourSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default set of an idle creature: wander in the low-priority slot.
    pub fn wandering() -> Self {
        Self::new()
            .with(GameConfig::WANDER_PRIORITY, Behaviour::Wander)
    }

    #[must_use]
    pub fn with(mut self, priority: Priority, behaviour: Behaviour) -> Self {
        self.selector.insert(priority, behaviour);
        self
    }

    /// Puts `behaviour` at `priority`, returning whatever held that slot.
    pub fn insert(&mut self, priority: Priority, behaviour: Behaviour) -> Option<Behaviour> {
        self.selector.insert(priority, behaviour)
    }

    pub fn get(&self, priority: Priority) -> Option<&Behaviour> {
        self.selector.get(priority)
    }

    pub fn len(&self) -> usize {
        self.selector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selector.is_empty()
    }

    /// `(priority, behaviour)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &Behaviour)> {
        self.selector.iter()
    }

    /// Turns the actor against `attacker`: pursue it in the follow slot
    /// (replacing the default wander) and stomp it in the top slot.
    pub fn provoke(&mut self, attacker: EntityId) {
        let follow = Behaviour::Follow { target: attacker };
        let stomp = Behaviour::Stomp { target: attacker };
        self.insert(GameConfig::FOLLOW_PRIORITY, follow);
        self.insert(GameConfig::STOMP_PRIORITY, stomp);
    }

    /// The action of the highest-priority behaviour that proposes one.
    pub fn decide(&self, ctx: &mut DecisionContext<'_, '_>) -> Option<Action> {
        let selection = self.selector.select(ctx)?;
        tracing::debug!(
            actor = %ctx.actor,
            priority = selection.priority,
            "behaviour selected"
        );
        Some(selection.output)
    }
}

impl FromIterator<(Priority, Behaviour)> for BehaviourSet {
    fn from_iter<T: IntoIterator<Item = (Priority, Behaviour)>>(iter: T) -> Self {
        Self {
            selector: iter.into_iter().collect(),
        }
    }
}
