//! Per-actor numeric attributes with bounded modification.
//!
//! Every attribute is a meter with a current value and a maximum. The current
//! value always stays within `[0, maximum]`; raising or lowering the maximum
//! re-clamps it.

use std::collections::BTreeMap;

/// Attribute slots an actor may carry. Health is mandatory, the rest optional.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKind {
    Health,
    Mana,
    Strength,
}

/// Direction of a modify-by-delta operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeOp {
    Increase,
    Decrease,
    /// Overwrite with the given value.
    Update,
}

/// Integer meter (e.g. health, mana) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    current: u32,
    maximum: u32,
}

impl Attribute {
    /// Creates a meter filled to `maximum`.
    pub const fn new(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Creates a meter with an explicit current value, clamped to `maximum`.
    pub fn with_current(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Applies `op` to the current value and returns the new value.
    pub fn modify(&mut self, op: AttributeOp, amount: u32) -> u32 {
        self.current = match op {
            AttributeOp::Increase => self.current.saturating_add(amount),
            AttributeOp::Decrease => self.current.saturating_sub(amount),
            AttributeOp::Update => amount,
        }
        .min(self.maximum);
        self.current
    }

    /// Applies `op` to the maximum and returns the new maximum.
    pub fn modify_maximum(&mut self, op: AttributeOp, amount: u32) -> u32 {
        self.maximum = match op {
            AttributeOp::Increase => self.maximum.saturating_add(amount),
            AttributeOp::Decrease => self.maximum.saturating_sub(amount),
            AttributeOp::Update => amount,
        };
        self.current = self.current.min(self.maximum);
        self.maximum
    }
}

/// Attribute store keyed by [`AttributeKind`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeStore {
    entries: BTreeMap<AttributeKind, Attribute>,
}

impl AttributeStore {
    /// Store holding only a full health meter.
    pub fn with_health(maximum: u32) -> Self {
        let mut store = Self::default();
        store.insert(AttributeKind::Health, Attribute::new(maximum));
        store
    }

    pub fn insert(&mut self, kind: AttributeKind, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(kind, attribute)
    }

    pub fn has(&self, kind: AttributeKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn attribute(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.entries.get(&kind)
    }

    /// Current value, if the attribute exists.
    pub fn get(&self, kind: AttributeKind) -> Option<u32> {
        self.entries.get(&kind).map(Attribute::current)
    }

    pub fn maximum(&self, kind: AttributeKind) -> Option<u32> {
        self.entries.get(&kind).map(Attribute::maximum)
    }

    /// Modifies the current value; `None` when the actor lacks the attribute.
    pub fn modify(&mut self, kind: AttributeKind, op: AttributeOp, amount: u32) -> Option<u32> {
        self.entries
            .get_mut(&kind)
            .map(|attribute| attribute.modify(op, amount))
    }

    /// Modifies the maximum; `None` when the actor lacks the attribute.
    pub fn modify_maximum(
        &mut self,
        kind: AttributeKind,
        op: AttributeOp,
        amount: u32,
    ) -> Option<u32> {
        self.entries
            .get_mut(&kind)
            .map(|attribute| attribute.modify_maximum(op, amount))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, &Attribute)> {
        self.entries.iter().map(|(kind, attribute)| (*kind, attribute))
    }
}
