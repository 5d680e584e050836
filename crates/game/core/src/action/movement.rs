use crate::action::{ActionOutcome, ActionTransition, display_name};
use crate::env::Dice;
use crate::state::{Actor, EntityId, GameMap, Position};

/// Step onto a neighbouring location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub destination: Position,
    /// Shown as "moves <direction>"; behaviours use "around".
    pub direction: &'static str,
    pub hotkey: Option<char>,
}

impl MoveAction {
    pub fn new(destination: Position, direction: &'static str, hotkey: Option<char>) -> Self {
        Self {
            destination,
            direction,
            hotkey,
        }
    }
}

impl ActionTransition for MoveAction {
    fn execute(&self, actor: EntityId, map: &mut GameMap, _dice: &mut Dice<'_>) -> ActionOutcome {
        let name = display_name(map, actor);
        match map.move_actor(actor, self.destination) {
            Ok(()) => ActionOutcome::done(format!("{name} moves {}", self.direction)),
            Err(error) => {
                tracing::warn!(%actor, destination = %self.destination, %error, "move skipped");
                ActionOutcome::done(format!("{name} cannot move {}", self.direction))
            }
        }
    }

    fn menu_description(&self, actor: &Actor, _map: &GameMap) -> String {
        format!("{actor} moves {}", self.direction)
    }

    fn hotkey(&self) -> Option<char> {
        self.hotkey
    }
}

/// Step one location closer to a pursued actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowAction {
    pub target: EntityId,
    pub destination: Position,
}

impl FollowAction {
    pub fn new(target: EntityId, destination: Position) -> Self {
        Self {
            target,
            destination,
        }
    }
}

impl ActionTransition for FollowAction {
    fn execute(&self, actor: EntityId, map: &mut GameMap, _dice: &mut Dice<'_>) -> ActionOutcome {
        let name = display_name(map, actor);
        let target = display_name(map, self.target);
        match map.move_actor(actor, self.destination) {
            Ok(()) => ActionOutcome::done(format!("{name} is following {target}")),
            Err(error) => {
                tracing::warn!(
                    %actor,
                    destination = %self.destination,
                    %error,
                    "follow step skipped"
                );
                ActionOutcome::done(format!("{name} loses track of {target}"))
            }
        }
    }

    fn menu_description(&self, actor: &Actor, map: &GameMap) -> String {
        format!("{actor} is following {}", display_name(map, self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{AttributeStore, Ground, Weapon};

    fn corridor() -> GameMap {
        let mut map = GameMap::new("Corridor", vec![vec![Ground::new('.', "Dirt"); 3]])
            .expect("layout");
        for (id, x) in [(0, 0), (1, 2)] {
            let actor = Actor::player(
                EntityId(id),
                format!("Walker {id}"),
                'w',
                AttributeStore::with_health(10),
                Weapon::new(1, "taps", 100),
            );
            map.add_actor(actor, Position::new(x, 0)).expect("free");
        }
        map
    }

    #[test]
    fn move_reports_direction() {
        let mut map = corridor();
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId(0));

        let outcome = MoveAction::new(Position::new(1, 0), "East", Some('6'))
            .execute(EntityId(0), &mut map, &mut dice);

        assert_eq!(outcome.description, "Walker 0 moves East");
        assert_eq!(outcome.next, None);
        assert_eq!(map.location_of(EntityId(0)), Some(Position::new(1, 0)));
    }

    #[test]
    fn blocked_move_changes_nothing() {
        let mut map = corridor();
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId(0));
        map.move_actor(EntityId(1), Position::new(1, 0))
            .expect("free");

        let outcome = MoveAction::new(Position::new(1, 0), "East", None)
            .execute(EntityId(0), &mut map, &mut dice);

        assert_eq!(outcome.description, "Walker 0 cannot move East");
        assert_eq!(map.location_of(EntityId(0)), Some(Position::new(0, 0)));
    }

    #[test]
    fn follow_names_the_target() {
        let mut map = corridor();
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId(0));

        let action = FollowAction::new(EntityId(1), Position::new(1, 0));
        let outcome = action.execute(EntityId(0), &mut map, &mut dice);

        assert_eq!(outcome.description, "Walker 0 is following Walker 1");
    }
}
