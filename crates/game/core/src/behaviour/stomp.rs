//! Close-range attack on a single target.

use super::DecisionContext;
use crate::action::{Action, AttackAction};
use crate::state::EntityId;

pub(super) fn propose(ctx: &mut DecisionContext<'_, '_>, target: EntityId) -> Option<Action> {
    let map = ctx.map;
    if !map.contains(target) {
        return None;
    }
    let here = map.location_of(ctx.actor)?;

    map.exits(here)
        .iter()
        .find(|exit| map.actor_at(exit.destination) == Some(target))
        .map(|exit| Action::Attack(AttackAction::intrinsic(target, exit.direction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Dice, PcgRng};
    use crate::state::{Actor, AttributeStore, GameMap, Ground, Position, Weapon};

    fn actor(id: u32) -> Actor {
        Actor::player(
            EntityId(id),
            "Brawler",
            'b',
            AttributeStore::with_health(5),
            Weapon::new(1, "stomps", 1),
        )
    }

    #[test]
    fn diagonal_neighbour_is_stomped() {
        let mut map = GameMap::new("Ring", vec![vec![Ground::new('.', "Dirt"); 2]; 2])
            .expect("layout");
        map.add_actor(actor(1), Position::new(0, 0)).expect("free");
        map.add_actor(actor(2), Position::new(1, 1)).expect("free");
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));
        let mut ctx = DecisionContext::new(EntityId(1), &map, &mut dice);

        let proposal = propose(&mut ctx, EntityId(2));
        let stomp = AttackAction::intrinsic(EntityId(2), "South-East");
        assert_eq!(proposal, Some(Action::Attack(stomp)));

        let brawler = map.actor(EntityId(1)).expect("registered");
        let menu = proposal.map(|action| action.menu_description(brawler, &map));
        assert_eq!(
            menu.as_deref(),
            Some("Brawler attacks Brawler at South-East with Intrinsic Weapon")
        );
    }

    #[test]
    fn distant_target_is_ignored() {
        let mut map = GameMap::new("Ring", vec![vec![Ground::new('.', "Dirt"); 3]])
            .expect("layout");
        map.add_actor(actor(1), Position::new(0, 0)).expect("free");
        map.add_actor(actor(2), Position::new(2, 0)).expect("free");
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));
        let mut ctx = DecisionContext::new(EntityId(1), &map, &mut dice);

        assert_eq!(propose(&mut ctx, EntityId(2)), None);
    }
}
