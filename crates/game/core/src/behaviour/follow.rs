//! Pursuit of a single target.

use super::DecisionContext;
use crate::action::{Action, FollowAction};
use crate::state::EntityId;

/// First enterable exit that strictly shortens the straight-line distance to
/// `target`, in exit order.
pub(super) fn propose(ctx: &mut DecisionContext<'_, '_>, target: EntityId) -> Option<Action> {
    let map = ctx.map;
    let here = map.location_of(ctx.actor)?;
    let there = map.location_of(target)?;
    let current = here.distance(there);

    map.exits(here)
        .iter()
        .filter(|exit| map.can_actor_enter(ctx.actor, exit.destination))
        .find(|exit| exit.destination.distance(there) < current)
        .map(|exit| Action::Follow(FollowAction::new(target, exit.destination)))
}
