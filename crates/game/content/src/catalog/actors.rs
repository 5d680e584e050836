use gravesite_core::{
    Actor, Attribute, AttributeKind, AttributeStore, BehaviourSet, Capabilities, EntityId, Splash,
    Weapon,
};

pub fn bare_fist() -> Weapon {
    Weapon::new(25, "punches", 50)
}

/// Heavy and inaccurate; occasionally sends a shockwave through its surroundings.
pub fn bare_stomp() -> Weapon {
    Weapon::new(100, "stomps", 5).with_splash(Splash::default())
}

/// The player character.
pub fn tarnished() -> Actor {
    let mut attributes = AttributeStore::with_health(150);
    attributes.insert(AttributeKind::Mana, Attribute::new(100));
    attributes.insert(AttributeKind::Strength, Attribute::new(5));

    let capabilities = Capabilities::HOSTILE_TO_ENEMY | Capabilities::CAN_WALK_ON_FLOOR;
    Actor::player(EntityId::PLAYER, "Tarnished", '@', attributes, bare_fist())
        .with_capabilities(capabilities)
}

/// Fire-immune wanderer that turns on whoever attacks it.
pub fn furnace_golem(id: EntityId) -> Actor {
    Actor::npc(
        id,
        "Furnace Golem",
        'A',
        AttributeStore::with_health(1000),
        bare_stomp(),
        BehaviourSet::wandering(),
    )
    .with_capabilities(Capabilities::FIRE_IMMUNE)
}

/// Actor templates a scenario can place by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Tarnished,
    FurnaceGolem,
}

impl ActorKind {
    /// Builds the actor. The player always takes [`EntityId::PLAYER`]; other
    /// kinds take `id`.
    pub fn build(self, id: EntityId) -> Actor {
        match self {
            ActorKind::Tarnished => tarnished(),
            ActorKind::FurnaceGolem => furnace_golem(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tarnished_can_enter_floors_and_provokes() {
        let player = tarnished();
        assert!(player.is_player_controlled());
        let walker = Capabilities::HOSTILE_TO_ENEMY | Capabilities::CAN_WALK_ON_FLOOR;
        assert!(player.has_capability(walker));
        assert_eq!(player.health(), 150);
        assert_eq!(player.attributes().get(AttributeKind::Strength), Some(5));
    }

    #[test]
    fn golem_wanders_and_ignores_fire() {
        let golem = furnace_golem(EntityId(1));
        assert!(golem.has_capability(Capabilities::FIRE_IMMUNE));
        assert_eq!(golem.behaviours(), Some(&BehaviourSet::wandering()));
        assert!(golem.intrinsic_weapon().splash.is_some());
    }
}
