//! Actors: attribute store, capability tags, weapons, inventory, controller.

use crate::behaviour::BehaviourSet;

use super::{
    Attribute, AttributeKind, AttributeOp, AttributeStore, Capabilities, EntityId, Item, ItemId,
    Weapon, WeaponItem,
};

/// Who decides what an actor does each turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Chosen externally (menu / input layer).
    Player,
    /// Chosen by the actor's prioritized behaviours.
    Behaviours(BehaviourSet),
}

/// A mobile entity with health and capabilities that acts each turn.
///
/// Health lives in the attribute store and is clamped to `[0, max]`. An actor
/// whose health reaches 0 is unconscious; [`Actor::knock_out`] flips the flag
/// exactly once per crossing.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    id: EntityId,
    name: String,
    glyph: char,
    attributes: AttributeStore,
    capabilities: Capabilities,
    intrinsic: Weapon,
    inventory: Vec<Item>,
    /// Inventory weapon used instead of the intrinsic one.
    wielded: Option<ItemId>,
    controller: Controller,
    unconscious: bool,
}

impl Actor {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        attributes: AttributeStore,
        intrinsic: Weapon,
        controller: Controller,
    ) -> Self {
        let mut attributes = attributes;
        if !attributes.has(AttributeKind::Health) {
            attributes.insert(AttributeKind::Health, Attribute::new(1));
        }

        Self {
            id,
            name: name.into(),
            glyph,
            attributes,
            capabilities: Capabilities::empty(),
            intrinsic,
            inventory: Vec::new(),
            wielded: None,
            controller,
            unconscious: false,
        }
    }

    /// Player-controlled actor.
    pub fn player(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        attributes: AttributeStore,
        intrinsic: Weapon,
    ) -> Self {
        Self::new(id, name, glyph, attributes, intrinsic, Controller::Player)
    }

    /// Behaviour-driven actor.
    pub fn npc(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        attributes: AttributeStore,
        intrinsic: Weapon,
        behaviours: BehaviourSet,
    ) -> Self {
        Self::new(
            id,
            name,
            glyph,
            attributes,
            intrinsic,
            Controller::Behaviours(behaviours),
        )
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities |= capabilities;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn has_capability(&self, capability: Capabilities) -> bool {
        self.capabilities.has(capability)
    }

    pub fn add_capability(&mut self, capability: Capabilities) {
        self.capabilities.insert(capability);
    }

    pub fn intrinsic_weapon(&self) -> &Weapon {
        &self.intrinsic
    }

    /// Wielded item weapon, if any.
    pub fn wielded_weapon(&self) -> Option<&WeaponItem> {
        self.wielded
            .and_then(|id| self.item(id))
            .and_then(Item::as_weapon)
    }

    pub fn wielded_item(&self) -> Option<ItemId> {
        self.wielded
    }

    /// Weapon used for attacks: the wielded item weapon, else the intrinsic one.
    pub fn active_weapon(&self) -> &Weapon {
        self.wielded_weapon()
            .map_or(&self.intrinsic, |item| &item.weapon)
    }

    /// Wields the inventory weapon `id`. Returns `false` if it is not a weapon
    /// the actor carries.
    pub fn wield(&mut self, id: ItemId) -> bool {
        let is_weapon = self.item(id).is_some_and(|item| item.as_weapon().is_some());
        if is_weapon {
            self.wielded = Some(id);
        }
        is_weapon
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn behaviours(&self) -> Option<&BehaviourSet> {
        match &self.controller {
            Controller::Behaviours(behaviours) => Some(behaviours),
            Controller::Player => None,
        }
    }

    pub fn behaviours_mut(&mut self) -> Option<&mut BehaviourSet> {
        match &mut self.controller {
            Controller::Behaviours(behaviours) => Some(behaviours),
            Controller::Player => None,
        }
    }

    pub fn is_player_controlled(&self) -> bool {
        matches!(self.controller, Controller::Player)
    }

    // ===== health =====

    pub fn health(&self) -> u32 {
        self.attributes.get(AttributeKind::Health).unwrap_or(0)
    }

    /// Reduces health, clamped at 0. Returns the damage actually removed.
    pub fn hurt(&mut self, amount: u32) -> u32 {
        let before = self.health();
        let after = self
            .attributes
            .modify(AttributeKind::Health, AttributeOp::Decrease, amount)
            .unwrap_or(0);
        before - after
    }

    /// Restores health, clamped at the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health();
        let after = self
            .attributes
            .modify(AttributeKind::Health, AttributeOp::Increase, amount)
            .unwrap_or(0);
        after - before
    }

    pub fn is_conscious(&self) -> bool {
        self.health() > 0
    }

    /// True once the unconscious handler has run.
    pub fn is_knocked_out(&self) -> bool {
        self.unconscious
    }

    /// Terminal handler for a health crossing to 0.
    ///
    /// Returns the announcement the first time it is called while the actor is
    /// at 0 health, and `None` on any repeat or while the actor is conscious.
    pub fn knock_out(&mut self, by: &str) -> Option<String> {
        if self.unconscious || self.is_conscious() {
            return None;
        }
        self.unconscious = true;
        let name = &self.name;
        Some(format!("{name} met their demise at the hands of {by}"))
    }

    // ===== inventory =====

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.inventory.iter_mut().find(|item| item.id == id)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.id == id)?;
        if self.wielded == Some(id) {
            self.wielded = None;
        }
        Some(self.inventory.remove(index))
    }

    /// Lends out the inventory item `id` together with the actor itself.
    ///
    /// The item is taken out for the duration of `f` so both can be borrowed
    /// mutably, then put back in its slot.
    pub fn with_item<R>(
        &mut self,
        id: ItemId,
        f: impl FnOnce(&mut Item, &mut Actor) -> R,
    ) -> Option<R> {
        let index = self.inventory.iter().position(|item| item.id == id)?;
        let mut item = self.inventory.remove(index);
        let result = f(&mut item, self);
        self.inventory.insert(index, item);
        Some(result)
    }
}

impl core::fmt::Display for Actor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
