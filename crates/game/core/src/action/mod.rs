//! Action domain.
//!
//! An [`Action`] is the executable unit of a turn. Behaviours propose one, the
//! player's controller picks one from [`available_actions`], and the engine
//! executes it against the map.
//!
//! # Module Structure
//!
//! - `combat`: attack with the intrinsic or a carried weapon
//! - `movement`: step through an exit, or step toward a followed actor
//! - `inventory`: consume an edible, pick up an item
//! - `wait`: rest (multi-turn) and do nothing
//! - `available`: menu of actions open to an actor right now

pub mod available;
pub mod combat;
pub mod inventory;
pub mod movement;
pub mod wait;

pub use available::available_actions;
pub use combat::{AttackAction, WeaponSource};
pub use inventory::{ConsumeAction, PickUpAction};
pub use movement::{FollowAction, MoveAction};
pub use wait::RestAction;

use crate::env::Dice;
use crate::state::{Actor, EntityId, GameMap};

/// What executing an action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Human-readable result shown in the turn log.
    pub description: String,

    /// Continuation to run instead of a fresh decision on the actor's next turn.
    pub next: Option<Action>,
}

impl ActionOutcome {
    pub fn done(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            next: None,
        }
    }

    #[must_use]
    pub fn then(mut self, next: Action) -> Self {
        self.next = Some(next);
        self
    }
}

/// Defines how a concrete action variant mutates the map.
pub trait ActionTransition {
    /// Performs the action for `actor`. Never fails: a precondition that no
    /// longer holds is reported in the description.
    fn execute(&self, actor: EntityId, map: &mut GameMap, dice: &mut Dice<'_>) -> ActionOutcome;

    /// Label shown in a menu.
    fn menu_description(&self, actor: &Actor, map: &GameMap) -> String;

    /// Key a menu should bind this action to, if it has a natural one.
    fn hotkey(&self) -> Option<char> {
        None
    }
}

/// Every action an actor can take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Attack(AttackAction),
    Move(MoveAction),
    Follow(FollowAction),
    Consume(ConsumeAction),
    PickUp(PickUpAction),
    Rest(RestAction),
    DoNothing,
}

impl Action {
    fn as_transition(&self) -> Option<&dyn ActionTransition> {
        match self {
            Action::Attack(action) => Some(action),
            Action::Move(action) => Some(action),
            Action::Follow(action) => Some(action),
            Action::Consume(action) => Some(action),
            Action::PickUp(action) => Some(action),
            Action::Rest(action) => Some(action),
            Action::DoNothing => None,
        }
    }

    pub fn execute(
        &self,
        actor: EntityId,
        map: &mut GameMap,
        dice: &mut Dice<'_>,
    ) -> ActionOutcome {
        match self.as_transition() {
            Some(action) => action.execute(actor, map, dice),
            None => ActionOutcome::done(format!("{} does nothing", display_name(map, actor))),
        }
    }

    pub fn menu_description(&self, actor: &Actor, map: &GameMap) -> String {
        match self.as_transition() {
            Some(action) => action.menu_description(actor, map),
            None => format!("{actor} does nothing"),
        }
    }

    pub fn hotkey(&self) -> Option<char> {
        self.as_transition().and_then(ActionTransition::hotkey)
    }
}

/// Name of `id` for messages, falling back to the id itself.
pub(crate) fn display_name(map: &GameMap, id: EntityId) -> String {
    map.actor(id)
        .map_or_else(|| id.to_string(), |actor| actor.name().to_owned())
}
