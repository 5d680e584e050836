use crate::action::Action;
use crate::state::{Actor, GameMap};

/// Source of decisions for player-controlled actors.
///
/// The engine hands over the menu built by
/// [`available_actions`](crate::action::available_actions); returning `None`
/// makes the actor do nothing this turn.
pub trait PlayerController {
    fn choose(&mut self, actor: &Actor, map: &GameMap, actions: &[Action]) -> Option<Action>;
}

/// Controller that never acts. Useful for runs without a player.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idle;

impl PlayerController for Idle {
    fn choose(&mut self, _actor: &Actor, _map: &GameMap, _actions: &[Action]) -> Option<Action> {
        None
    }
}
