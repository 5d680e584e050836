//! Generate the actions open to an actor.
//!
//! This is the menu the (external) input layer shows the player: a move for
//! every enterable exit, an attack per weapon against every neighbour, a pick
//! up per portable item underfoot, a consume per carried edible, and a rest.

use crate::action::{
    Action, AttackAction, ConsumeAction, MoveAction, PickUpAction, RestAction, WeaponSource,
};
use crate::config::GameConfig;
use crate::state::{EntityId, GameMap};

/// Get all actions `actor` can perform right now.
///
/// Returns an empty list when the actor is not on the map.
pub fn available_actions(map: &GameMap, actor: EntityId) -> Vec<Action> {
    let (Some(position), Some(state)) = (map.location_of(actor), map.actor(actor)) else {
        return Vec::new();
    };

    let mut actions = Vec::new();

    for exit in map.exits(position) {
        if map.can_actor_enter(actor, exit.destination) {
            actions.push(Action::Move(MoveAction::new(
                exit.destination,
                exit.direction,
                Some(exit.hotkey),
            )));
        }
    }

    for exit in map.exits(position) {
        let Some(target) = map.actor_at(exit.destination) else {
            continue;
        };
        if target == actor {
            continue;
        }
        let bare_handed = AttackAction::intrinsic(target, exit.direction);
        actions.push(Action::Attack(bare_handed));
        for item in state.inventory() {
            if item.as_weapon().is_some() {
                actions.push(Action::Attack(AttackAction::new(
                    target,
                    exit.direction,
                    WeaponSource::Item(item.id),
                )));
            }
        }
    }

    if let Some(location) = map.at(position) {
        actions.extend(
            location
                .items()
                .iter()
                .filter(|item| item.is_portable())
                .map(|item| Action::PickUp(PickUpAction::new(item.id))),
        );
    }

    actions.extend(
        state
            .inventory()
            .iter()
            .filter(|item| item.as_edible().is_some())
            .map(|item| Action::Consume(ConsumeAction::new(item.id))),
    );

    actions.push(Action::Rest(RestAction::new(GameConfig::REST_TURNS)));
    actions
}
