//! Scripted stand-in for a human at the menu.
//!
//! The autopilot picks from the same action list a player would see: it
//! drinks when wounded, grabs and eats what it stands on, swings its hardest
//! weapon at anything adjacent and otherwise walks toward the nearest item
//! (or, once the field is bare, the nearest other actor).

use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};

use gravesite_core::{
    Action, Actor, AttributeKind, EdibleEffect, GameMap, PlayerController, Position, WeaponSource,
};

#[derive(Clone, Debug)]
pub struct Autopilot {
    /// Drink a healing flask below this share of maximum health, in percent.
    pub heal_below: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { heal_below: 50 }
    }
}

impl PlayerController for Autopilot {
    fn choose(&mut self, actor: &Actor, map: &GameMap, actions: &[Action]) -> Option<Action> {
        let choice = self
            .heal(actor, actions)
            .or_else(|| pick_up(actions))
            .or_else(|| empower(actor, actions))
            .or_else(|| strongest_attack(actor, actions))
            .or_else(|| step_toward_target(actor, map, actions))
            .or_else(|| actions.iter().find(|action| matches!(action, Action::Rest(_))).cloned());

        if let Some(action) = &choice {
            tracing::debug!(actor = %actor.id(), "{}", action.menu_description(actor, map));
        }
        choice
    }
}

impl Autopilot {
    fn heal(&self, actor: &Actor, actions: &[Action]) -> Option<Action> {
        let maximum = actor.attributes().maximum(AttributeKind::Health)?;
        if actor.health() * 100 >= maximum * self.heal_below {
            return None;
        }
        consume_matching(actor, actions, |effect| matches!(effect, EdibleEffect::RestoreHealth(_)))
    }
}

fn pick_up(actions: &[Action]) -> Option<Action> {
    actions.iter().find(|action| matches!(action, Action::PickUp(_))).cloned()
}

fn empower(actor: &Actor, actions: &[Action]) -> Option<Action> {
    consume_matching(actor, actions, |effect| matches!(effect, EdibleEffect::Empower { .. }))
}

fn consume_matching(
    actor: &Actor,
    actions: &[Action],
    wanted: impl Fn(EdibleEffect) -> bool,
) -> Option<Action> {
    actions
        .iter()
        .find(|action| match action {
            Action::Consume(consume) => actor
                .item(consume.item)
                .and_then(|item| item.as_edible())
                .is_some_and(|edible| !edible.is_empty() && wanted(edible.effect)),
            _ => false,
        })
        .cloned()
}

/// Attack with the best expected damage (damage times hit rate). Ties go to
/// the wielded weapon, then to the first listed attack.
fn strongest_attack(actor: &Actor, actions: &[Action]) -> Option<Action> {
    actions
        .iter()
        .enumerate()
        .filter_map(|(index, action)| match action {
            Action::Attack(attack) => {
                let weapon = match attack.weapon {
                    WeaponSource::Item(id) => &actor.item(id)?.as_weapon()?.weapon,
                    WeaponSource::Intrinsic => actor.intrinsic_weapon(),
                };
                let expected = weapon.scaled_damage() * weapon.hit_rate;
                let wielded = matches!(
                    attack.weapon,
                    WeaponSource::Item(id) if actor.wielded_item() == Some(id)
                );
                Some(((expected, wielded, Reverse(index)), action))
            }
            _ => None,
        })
        .max_by_key(|(key, _)| *key)
        .map(|(_, action)| action.clone())
}

fn step_toward_target(actor: &Actor, map: &GameMap, actions: &[Action]) -> Option<Action> {
    let start = map.location_of(actor.id())?;
    let goals = targets(actor, map, start);
    let step = first_step(actor, map, start, &goals)?;

    actions
        .iter()
        .find(|action| matches!(action, Action::Move(movement) if movement.destination == step))
        .cloned()
}

/// Locations with items on them, or failing that, free spots next to the
/// other actors.
fn targets(actor: &Actor, map: &GameMap, start: Position) -> Vec<Position> {
    let items: Vec<Position> = map
        .locations()
        .filter(|location| !location.items().is_empty() && location.position() != start)
        .map(|location| location.position())
        .collect();
    if !items.is_empty() {
        return items;
    }

    map.actors()
        .filter(|other| other.id() != actor.id() && other.is_conscious())
        .filter_map(|other| map.location_of(other.id()))
        .flat_map(|position| map.exits(position).iter().map(|exit| exit.destination))
        .collect()
}

/// Breadth-first search over enterable locations; returns the first move of a
/// shortest route to any goal.
fn first_step(
    actor: &Actor,
    map: &GameMap,
    start: Position,
    goals: &[Position],
) -> Option<Position> {
    let mut came_from: BTreeMap<Position, Position> = BTreeMap::new();
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        if current != start && goals.contains(&current) {
            let mut step = current;
            while let Some(&previous) = came_from.get(&step) {
                if previous == start {
                    return Some(step);
                }
                step = previous;
            }
            return None;
        }

        for exit in map.exits(current) {
            let next = exit.destination;
            if next == start
                || came_from.contains_key(&next)
                || !map.can_actor_enter(actor.id(), next)
            {
                continue;
            }
            came_from.insert(next, current);
            frontier.push_back(next);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravesite_content::catalog::{dirt, furnace_golem, great_knife, tarnished, wall};
    use gravesite_core::{EntityId, ItemKind, available_actions};

    fn yard(rows: &[&str]) -> GameMap {
        let grid: Vec<Vec<_>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|glyph| if glyph == '#' { wall() } else { dirt() })
                    .collect::<Vec<_>>()
            })
            .collect();
        GameMap::new("Yard", grid).unwrap()
    }

    fn choose(map: &GameMap) -> Option<Action> {
        let player = map.actor(EntityId::PLAYER).unwrap();
        let actions = available_actions(map, EntityId::PLAYER);
        Autopilot::default().choose(player, map, &actions)
    }

    #[test]
    fn walks_around_a_wall_toward_an_item() {
        let mut map = yard(&["..#..", "..#..", "....."]);
        map.add_actor(tarnished(), Position::new(0, 0)).unwrap();
        map.place_item(Position::new(4, 0), ItemKind::Weapon(great_knife()))
            .unwrap();

        let Some(Action::Move(movement)) = choose(&map) else {
            panic!("expected a move");
        };
        assert_eq!(movement.destination, Position::new(1, 1));
    }

    #[test]
    fn attacks_an_adjacent_actor() {
        let mut map = yard(&["..."]);
        map.add_actor(tarnished(), Position::new(0, 0)).unwrap();
        map.add_actor(furnace_golem(EntityId(1)), Position::new(1, 0))
            .unwrap();

        assert!(matches!(
            choose(&map),
            Some(Action::Attack(attack)) if attack.target == EntityId(1)
        ));
    }

    #[test]
    fn rests_when_nothing_is_reachable() {
        let mut map = yard(&[".#."]);
        map.add_actor(tarnished(), Position::new(0, 0)).unwrap();
        map.place_item(Position::new(2, 0), ItemKind::Weapon(great_knife()))
            .unwrap();

        assert!(matches!(choose(&map), Some(Action::Rest(_))));
    }
}
