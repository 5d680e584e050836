//! Items: charge-limited edibles and strength-gated weapons.

use super::{Actor, AttributeKind, AttributeOp, ItemId, Weapon};

/// What an edible does to whoever consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdibleEffect {
    /// Restores a fixed amount of health.
    RestoreHealth(u32),
    /// Restores a fixed amount of mana.
    RestoreMana(u32),
    /// Permanently raises maximums; the item removes itself once eaten.
    ///
    /// Health and mana gain headroom only. Strength is raised on both its
    /// maximum and its current value, so the gain counts for weapon gates
    /// right away.
    Empower {
        max_health: u32,
        max_mana: u32,
        strength: u32,
    },
}

impl EdibleEffect {
    fn apply(self, actor: &mut Actor) {
        let attributes = actor.attributes_mut();
        match self {
            EdibleEffect::RestoreHealth(amount) => {
                attributes.modify(AttributeKind::Health, AttributeOp::Increase, amount);
            }
            EdibleEffect::RestoreMana(amount) => {
                attributes.modify(AttributeKind::Mana, AttributeOp::Increase, amount);
            }
            EdibleEffect::Empower {
                max_health,
                max_mana,
                strength,
            } => {
                attributes.modify_maximum(AttributeKind::Health, AttributeOp::Increase, max_health);
                attributes.modify_maximum(AttributeKind::Mana, AttributeOp::Increase, max_mana);
                // Strength is a plain stat, so the gain lands on the current value too
                attributes.modify_maximum(AttributeKind::Strength, AttributeOp::Increase, strength);
                attributes.modify(AttributeKind::Strength, AttributeOp::Increase, strength);
            }
        }
    }

    /// Whether the item leaves the inventory after a successful consumption.
    pub fn removes_item(self) -> bool {
        matches!(self, EdibleEffect::Empower { .. })
    }
}

/// Result of one `consume` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consumption {
    pub description: String,
    /// A charge was spent and the effect applied.
    pub applied: bool,
    /// The item should be removed from the consumer's inventory.
    pub spent: bool,
}

/// Consumable with a non-recoverable charge count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdibleItem {
    pub name: String,
    pub glyph: char,
    charges: u32,
    /// Flavor text completing "<actor> ..." ("is healed").
    pub flavor: String,
    pub effect: EdibleEffect,
}

impl EdibleItem {
    pub fn new(
        name: impl Into<String>,
        glyph: char,
        charges: u32,
        flavor: impl Into<String>,
        effect: EdibleEffect,
    ) -> Self {
        Self {
            name: name.into(),
            glyph,
            charges,
            flavor: flavor.into(),
            effect,
        }
    }

    pub fn charges(&self) -> u32 {
        self.charges
    }

    pub fn is_empty(&self) -> bool {
        self.charges == 0
    }

    /// Spends one charge on `actor`.
    ///
    /// An exhausted item reports emptiness and changes nothing.
    pub fn consume(&mut self, actor: &mut Actor) -> Consumption {
        if self.is_empty() {
            return Consumption {
                description: format!("{} is empty", self.name),
                applied: false,
                spent: false,
            };
        }

        self.charges -= 1;
        self.effect.apply(actor);

        Consumption {
            description: format!(
                "{} consumed by {}. {} {}.",
                self.name,
                actor.name(),
                actor.name(),
                self.flavor
            ),
            applied: true,
            spent: self.effect.removes_item(),
        }
    }
}

/// Weapon lying in the world or carried in an inventory.
///
/// Portability is a one-way gate: it flips to `true` once an actor strong
/// enough stands on the weapon and never flips back.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponItem {
    pub name: String,
    pub glyph: char,
    pub weapon: Weapon,
    pub strength_required: u32,
    portable: bool,
}

impl WeaponItem {
    /// Creates a heavy weapon that cannot be carried until the strength gate opens.
    pub fn new(
        name: impl Into<String>,
        glyph: char,
        weapon: Weapon,
        strength_required: u32,
    ) -> Self {
        Self {
            name: name.into(),
            glyph,
            weapon,
            strength_required,
            portable: false,
        }
    }

    pub fn is_portable(&self) -> bool {
        self.portable
    }

    /// Opens the portability gate if `occupant` is strong enough.
    ///
    /// Returns `true` only on the call that flips the flag.
    pub fn check_strength(&mut self, occupant: Option<&Actor>, required: u32) -> bool {
        if self.portable {
            return false;
        }
        let strong_enough = occupant
            .and_then(|actor| actor.attributes().get(AttributeKind::Strength))
            .is_some_and(|strength| strength >= required);
        if strong_enough {
            self.portable = true;
        }
        strong_enough
    }
}

/// Item payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Edible(EdibleItem),
    Weapon(WeaponItem),
}

/// An item instance with a stable identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            ItemKind::Edible(edible) => &edible.name,
            ItemKind::Weapon(weapon) => &weapon.name,
        }
    }

    pub fn glyph(&self) -> char {
        match &self.kind {
            ItemKind::Edible(edible) => edible.glyph,
            ItemKind::Weapon(weapon) => weapon.glyph,
        }
    }

    /// Edibles can always be carried; weapons only once their gate opened.
    pub fn is_portable(&self) -> bool {
        match &self.kind {
            ItemKind::Edible(_) => true,
            ItemKind::Weapon(weapon) => weapon.is_portable(),
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponItem> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            ItemKind::Edible(_) => None,
        }
    }

    pub fn as_edible(&self) -> Option<&EdibleItem> {
        match &self.kind {
            ItemKind::Edible(edible) => Some(edible),
            ItemKind::Weapon(_) => None,
        }
    }

    /// Per-tick update for an item lying on the ground.
    ///
    /// Returns `true` when the tick changed the item (a weapon became portable).
    pub fn tick(&mut self, occupant: Option<&Actor>) -> bool {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => {
                let required = weapon.strength_required;
                weapon.check_strength(occupant, required)
            }
            ItemKind::Edible(_) => false,
        }
    }
}
