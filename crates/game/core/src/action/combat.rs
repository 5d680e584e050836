use crate::action::{ActionOutcome, ActionTransition, display_name};
use crate::combat::resolve_attack;
use crate::env::Dice;
use crate::state::{Actor, Capabilities, EntityId, GameMap, ItemId, Weapon};

/// Which weapon an attack swings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponSource {
    /// The attacker's always-available weapon.
    Intrinsic,
    /// A weapon carried in the attacker's inventory.
    Item(ItemId),
}

/// Attack an actor standing on a neighbouring location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub target: EntityId,
    /// Direction of the target, for menus.
    pub direction: &'static str,
    pub weapon: WeaponSource,
}

impl AttackAction {
    pub fn new(target: EntityId, direction: &'static str, weapon: WeaponSource) -> Self {
        Self {
            target,
            direction,
            weapon,
        }
    }

    /// Attack with the intrinsic weapon.
    pub fn intrinsic(target: EntityId, direction: &'static str) -> Self {
        Self::new(target, direction, WeaponSource::Intrinsic)
    }

    /// Weapon the attacker swings. A carried weapon that is gone falls back to
    /// the intrinsic one.
    fn weapon_of(&self, attacker: &Actor) -> Weapon {
        match self.weapon {
            WeaponSource::Item(id) => attacker
                .item(id)
                .and_then(|item| item.as_weapon())
                .map_or_else(
                    || attacker.intrinsic_weapon().clone(),
                    |item| item.weapon.clone(),
                ),
            WeaponSource::Intrinsic => attacker.intrinsic_weapon().clone(),
        }
    }
}

/// Hostile attackers turn behaviour-driven targets against them.
fn provoke(map: &mut GameMap, attacker: EntityId, target: EntityId) {
    let hostile = map
        .actor(attacker)
        .is_some_and(|actor| actor.has_capability(Capabilities::HOSTILE_TO_ENEMY));
    if !hostile {
        return;
    }
    if let Some(behaviours) = map.actor_mut(target).and_then(Actor::behaviours_mut) {
        behaviours.provoke(attacker);
        tracing::debug!(%attacker, %target, "target provoked");
    }
}

impl ActionTransition for AttackAction {
    fn execute(&self, actor: EntityId, map: &mut GameMap, dice: &mut Dice<'_>) -> ActionOutcome {
        let Some(weapon) = map.actor(actor).map(|attacker| self.weapon_of(attacker)) else {
            tracing::warn!(%actor, "attacker is not registered");
            return ActionOutcome::done(format!("{} cannot attack", display_name(map, actor)));
        };

        provoke(map, actor, self.target);
        let report = resolve_attack(map, actor, self.target, &weapon, dice);
        ActionOutcome::done(report.to_string())
    }

    fn menu_description(&self, actor: &Actor, map: &GameMap) -> String {
        let weapon = match self.weapon {
            WeaponSource::Item(id) => actor
                .item(id)
                .map_or("Intrinsic Weapon", |item| item.name()),
            WeaponSource::Intrinsic => "Intrinsic Weapon",
        };
        format!(
            "{actor} attacks {} at {} with {weapon}",
            display_name(map, self.target),
            self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviour::{Behaviour, BehaviourSet};
    use crate::config::GameConfig;
    use crate::env::ScriptedRng;
    use crate::state::{AttributeStore, Ground, ItemKind, Position, WeaponItem};

    fn arena() -> GameMap {
        let mut map = GameMap::new("Arena", vec![vec![Ground::new('.', "Dirt"); 3]])
            .expect("layout");
        let player = Actor::player(
            EntityId::PLAYER,
            "Tarnished",
            '@',
            AttributeStore::with_health(150),
            Weapon::new(25, "punches", 50),
        )
        .with_capabilities(Capabilities::HOSTILE_TO_ENEMY);
        let golem = Actor::npc(
            EntityId(1),
            "Furnace Golem",
            'A',
            AttributeStore::with_health(1000),
            Weapon::new(100, "stomps", 5),
            BehaviourSet::wandering(),
        );
        map.add_actor(player, Position::new(0, 0)).expect("free");
        map.add_actor(golem, Position::new(1, 0)).expect("free");
        map
    }

    #[test]
    fn hostile_attack_provokes_even_on_a_miss() {
        let mut map = arena();
        let rng = ScriptedRng::new(vec![99]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);

        let outcome = AttackAction::intrinsic(EntityId(1), "East")
            .execute(EntityId::PLAYER, &mut map, &mut dice);

        assert_eq!(outcome.description, "Tarnished misses Furnace Golem.");
        let behaviours = map
            .actor(EntityId(1))
            .and_then(Actor::behaviours)
            .expect("npc");
        let target = EntityId::PLAYER;
        assert_eq!(
            behaviours.get(GameConfig::STOMP_PRIORITY),
            Some(&Behaviour::Stomp { target })
        );
        assert_eq!(
            behaviours.get(GameConfig::FOLLOW_PRIORITY),
            Some(&Behaviour::Follow { target })
        );
    }

    #[test]
    fn non_hostile_attack_leaves_behaviours_alone() {
        let mut map = arena();
        let rng = ScriptedRng::new(vec![99]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));

        AttackAction::intrinsic(EntityId::PLAYER, "West")
            .execute(EntityId(1), &mut map, &mut dice);

        let behaviours = map
            .actor(EntityId(1))
            .and_then(Actor::behaviours)
            .expect("npc");
        assert_eq!(behaviours, &BehaviourSet::wandering());
    }

    #[test]
    fn carried_weapon_is_used_and_named_in_menu() {
        let mut map = arena();
        let sword = WeaponItem::new("Short Sword", '!', Weapon::new(100, "slashes", 75), 10);
        let id = map
            .give_item(EntityId::PLAYER, ItemKind::Weapon(sword))
            .expect("player registered");
        let action = AttackAction::new(EntityId(1), "East", WeaponSource::Item(id));

        let player = map.actor(EntityId::PLAYER).expect("player");
        assert_eq!(
            action.menu_description(player, &map),
            "Tarnished attacks Furnace Golem at East with Short Sword"
        );

        let rng = ScriptedRng::new(vec![0]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);
        let outcome = action.execute(EntityId::PLAYER, &mut map, &mut dice);
        assert_eq!(
            outcome.description,
            "Tarnished slashes Furnace Golem for 100 damage"
        );
        assert_eq!(map.actor(EntityId(1)).map(Actor::health), Some(900));
    }

    #[test]
    fn missing_item_weapon_falls_back_to_intrinsic() {
        let mut map = arena();
        let action = AttackAction::new(EntityId(1), "East", WeaponSource::Item(ItemId(77)));
        let rng = ScriptedRng::new(vec![0]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);

        let outcome = action.execute(EntityId::PLAYER, &mut map, &mut dice);

        assert_eq!(
            outcome.description,
            "Tarnished punches Furnace Golem for 25 damage"
        );
    }
}
