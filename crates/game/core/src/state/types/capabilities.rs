//! Closed vocabulary of boolean traits carried by actors and grounds.

use bitflags::bitflags;

bitflags! {
    /// Capability tags used for eligibility checks.
    ///
    /// The set is fixed at compile time; entities test membership instead of
    /// looking up open-ended runtime tags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u16 {
        /// Takes no damage from burning ground.
        const FIRE_IMMUNE = 1 << 0;
        /// Attacks provoke behaviour-driven actors into pursuit.
        const HOSTILE_TO_ENEMY = 1 << 1;
        /// May enter ground that requires it (e.g. building floors).
        const CAN_WALK_ON_FLOOR = 1 << 2;
        /// Ground that an explosion can set on fire.
        const COMBUSTIBLE = 1 << 3;
        /// Ground that is currently on fire.
        const BURNING = 1 << 4;
    }
}

impl Capabilities {
    /// True when every tag in `required` is present.
    #[inline]
    pub fn has(self, required: Capabilities) -> bool {
        self.contains(required)
    }
}
