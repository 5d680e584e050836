//! Random stroll through an enterable exit.

use arrayvec::ArrayVec;

use super::DecisionContext;
use crate::action::{Action, MoveAction};
use crate::config::GameConfig;
use crate::state::Exit;

pub(super) fn propose(ctx: &mut DecisionContext<'_, '_>) -> Option<Action> {
    let map = ctx.map;
    let actor = ctx.actor;
    let here = map.location_of(actor)?;
    let open: ArrayVec<&Exit, { GameConfig::MAX_EXITS }> = map
        .exits(here)
        .iter()
        .filter(|exit| map.can_actor_enter(actor, exit.destination))
        .collect();
    if open.is_empty() {
        return None;
    }

    let exit = open[ctx.dice.pick(open.len())];
    tracing::debug!(%actor, destination = %exit.destination, "wandering");
    let step = MoveAction::new(exit.destination, "around", Some(exit.hotkey));
    Some(Action::Move(step))
}
