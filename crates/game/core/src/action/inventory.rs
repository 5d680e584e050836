use crate::action::{ActionOutcome, ActionTransition, display_name};
use crate::env::Dice;
use crate::state::{Actor, EntityId, GameMap, ItemId, ItemKind};

/// Spend one charge of an edible in the actor's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumeAction {
    pub item: ItemId,
}

impl ConsumeAction {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl ActionTransition for ConsumeAction {
    fn execute(&self, actor: EntityId, map: &mut GameMap, _dice: &mut Dice<'_>) -> ActionOutcome {
        let name = display_name(map, actor);
        let Some(consumer) = map.actor_mut(actor) else {
            tracing::warn!(%actor, "consumer is not registered");
            return ActionOutcome::done(format!("{name} has nothing to consume"));
        };

        let consumption = consumer.with_item(self.item, |item, consumer| match &mut item.kind {
            ItemKind::Edible(edible) => Some(edible.consume(consumer)),
            ItemKind::Weapon(_) => None,
        });

        match consumption.flatten() {
            Some(consumption) => {
                if consumption.spent {
                    consumer.remove_item(self.item);
                }
                tracing::debug!(
                    %actor,
                    item = %self.item,
                    applied = consumption.applied,
                    "consumed"
                );
                ActionOutcome::done(consumption.description)
            }
            None => {
                tracing::warn!(%actor, item = %self.item, "no edible with this id in inventory");
                ActionOutcome::done(format!("{name} has nothing to consume"))
            }
        }
    }

    fn menu_description(&self, actor: &Actor, _map: &GameMap) -> String {
        let item = actor.item(self.item).map_or("nothing", |item| item.name());
        format!("{actor} consumes {item}")
    }
}

/// Lift a portable item off the actor's location. A weapon picked up this
/// way becomes the wielded weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpAction {
    pub item: ItemId,
}

impl PickUpAction {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl ActionTransition for PickUpAction {
    fn execute(&self, actor: EntityId, map: &mut GameMap, _dice: &mut Dice<'_>) -> ActionOutcome {
        let name = display_name(map, actor);
        let Some(position) = map.location_of(actor) else {
            tracing::warn!(%actor, "picker is not on the map");
            return ActionOutcome::done(format!("{name} cannot reach anything"));
        };

        let portable = map
            .at(position)
            .and_then(|location| location.items().iter().find(|item| item.id == self.item))
            .is_some_and(|item| item.is_portable());
        if !portable {
            tracing::warn!(%actor, item = %self.item, %position, "item is absent or too heavy");
            return ActionOutcome::done(format!("{name} cannot pick that up"));
        }

        let Some(item) = map.take_item(position, self.item) else {
            return ActionOutcome::done(format!("{name} cannot pick that up"));
        };
        let item_name = item.name().to_owned();
        if let Some(picker) = map.actor_mut(actor) {
            picker.add_item(item);
            picker.wield(self.item);
        }
        ActionOutcome::done(format!("{name} picks up the {item_name}"))
    }

    fn menu_description(&self, actor: &Actor, map: &GameMap) -> String {
        let item = map
            .location_of(actor.id())
            .and_then(|position| map.at(position))
            .and_then(|location| location.items().iter().find(|item| item.id == self.item))
            .map_or("nothing", |item| item.name());
        format!("{actor} picks up the {item}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{
        Attribute, AttributeKind, AttributeStore, EdibleEffect, EdibleItem, Ground, Position,
        Weapon, WeaponItem,
    };

    fn with_player(strength: u32) -> GameMap {
        let mut map = GameMap::new("Camp", vec![vec![Ground::new('.', "Dirt"); 2]])
            .expect("layout");
        let mut attributes = AttributeStore::with_health(150);
        attributes.insert(AttributeKind::Strength, Attribute::new(strength));
        let player = Actor::player(
            EntityId::PLAYER,
            "Tarnished",
            '@',
            attributes,
            Weapon::new(25, "punches", 50),
        );
        map.add_actor(player, Position::new(0, 0)).expect("free");
        map
    }

    fn fragment() -> ItemKind {
        ItemKind::Edible(EdibleItem::new(
            "Shadowtree Fragment",
            'e',
            1,
            "feels stronger",
            EdibleEffect::Empower {
                max_health: 50,
                max_mana: 25,
                strength: 5,
            },
        ))
    }

    #[test]
    fn spent_fragment_leaves_the_inventory() {
        let mut map = with_player(5);
        let id = map
            .give_item(EntityId::PLAYER, fragment())
            .expect("player registered");
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);

        let outcome = ConsumeAction::new(id)
            .execute(EntityId::PLAYER, &mut map, &mut dice);

        assert_eq!(
            outcome.description,
            "Shadowtree Fragment consumed by Tarnished. Tarnished feels stronger."
        );
        let player = map.actor(EntityId::PLAYER).expect("player");
        assert!(player.inventory().is_empty());
        assert_eq!(player.attributes().get(AttributeKind::Strength), Some(10));
    }

    #[test]
    fn consuming_a_weapon_is_refused() {
        let mut map = with_player(5);
        let knife = WeaponItem::new("Great Knife", '†', Weapon::new(75, "stabs", 60), 5);
        let id = map
            .give_item(EntityId::PLAYER, ItemKind::Weapon(knife))
            .expect("player registered");
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);

        let outcome = ConsumeAction::new(id)
            .execute(EntityId::PLAYER, &mut map, &mut dice);

        assert_eq!(outcome.description, "Tarnished has nothing to consume");
        let player = map.actor(EntityId::PLAYER).expect("player");
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn heavy_weapon_stays_until_the_gate_opens() {
        let mut map = with_player(5);
        let sword = WeaponItem::new("Short Sword", '!', Weapon::new(100, "slashes", 75), 10);
        let id = map
            .place_item(Position::new(0, 0), ItemKind::Weapon(sword))
            .expect("in bounds");
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);

        let refused = PickUpAction::new(id)
            .execute(EntityId::PLAYER, &mut map, &mut dice);
        assert_eq!(refused.description, "Tarnished cannot pick that up");
        let location = map.at(Position::new(0, 0)).expect("tile");
        assert_eq!(location.items().len(), 1);
    }

    #[test]
    fn picked_up_weapon_is_wielded() {
        let mut map = with_player(5);
        let knife = WeaponItem::new("Great Knife", '†', Weapon::new(75, "stabs", 60), 5);
        let id = map
            .place_item(Position::new(0, 0), ItemKind::Weapon(knife))
            .expect("in bounds");
        map.tick_items();
        let rng = ScriptedRng::default();
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);

        let outcome = PickUpAction::new(id)
            .execute(EntityId::PLAYER, &mut map, &mut dice);

        assert_eq!(outcome.description, "Tarnished picks up the Great Knife");
        let player = map.actor(EntityId::PLAYER).expect("player");
        assert_eq!(player.wielded_item(), Some(id));
        assert_eq!(player.active_weapon().verb, "stabs");
        let location = map.at(Position::new(0, 0)).expect("tile");
        assert!(location.items().is_empty());
    }
}
