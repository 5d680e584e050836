use gravesite_core::{EdibleEffect, EdibleItem, ItemKind, Weapon, WeaponItem};

pub fn short_sword() -> WeaponItem {
    WeaponItem::new("Short Sword", '!', Weapon::new(100, "slashes", 75), 10)
}

pub fn great_knife() -> WeaponItem {
    WeaponItem::new("Great Knife", '†', Weapon::new(75, "stabs", 60), 5)
}

pub fn flask_of_healing() -> EdibleItem {
    EdibleItem::new(
        "Flask of Healing",
        'u',
        5,
        "is healed",
        EdibleEffect::RestoreHealth(150),
    )
}

pub fn flask_of_rejuvenation() -> EdibleItem {
    EdibleItem::new(
        "Flask of Rejuvenation",
        'o',
        3,
        "is rejuvenated",
        EdibleEffect::RestoreMana(100),
    )
}

/// Single-use permanent upgrade.
pub fn shadowtree_fragment() -> EdibleItem {
    EdibleItem::new(
        "Shadowtree Fragment",
        'e',
        1,
        "feels stronger",
        EdibleEffect::Empower {
            max_health: 50,
            max_mana: 25,
            strength: 5,
        },
    )
}

/// Item entries a scenario can place by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCatalog {
    ShortSword,
    GreatKnife,
    FlaskOfHealing,
    FlaskOfRejuvenation,
    ShadowtreeFragment,
}

impl ItemCatalog {
    pub fn build(self) -> ItemKind {
        match self {
            ItemCatalog::ShortSword => ItemKind::Weapon(short_sword()),
            ItemCatalog::GreatKnife => ItemKind::Weapon(great_knife()),
            ItemCatalog::FlaskOfHealing => ItemKind::Edible(flask_of_healing()),
            ItemCatalog::FlaskOfRejuvenation => ItemKind::Edible(flask_of_rejuvenation()),
            ItemCatalog::ShadowtreeFragment => ItemKind::Edible(shadowtree_fragment()),
        }
    }
}
