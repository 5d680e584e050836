//! Ground descriptors and the burning-terrain state machine.
//!
//! ```text
//!   Normal(ground) --ignite (combustible only)--> Burning { original, remaining }
//!   Burning { remaining >= 0 } --tick--> Burning { remaining - 1 }   (burns occupant)
//!   Burning { remaining <  0 } --tick--> Normal(original)
//! ```

use super::Capabilities;
use crate::config::GameConfig;

/// Who may step onto a ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryPolicy {
    /// Anyone may enter.
    Open,
    /// Nobody may enter (walls).
    Closed,
    /// Only actors carrying all of the given capabilities.
    Requires(Capabilities),
}

impl EntryPolicy {
    pub fn admits(self, actor: Capabilities) -> bool {
        match self {
            EntryPolicy::Open => true,
            EntryPolicy::Closed => false,
            EntryPolicy::Requires(required) => actor.has(required),
        }
    }
}

/// Immutable ground descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ground {
    pub glyph: char,
    pub name: String,
    pub capabilities: Capabilities,
    pub entry: EntryPolicy,
}

impl Ground {
    pub fn new(glyph: char, name: impl Into<String>) -> Self {
        Self {
            glyph,
            name: name.into(),
            capabilities: Capabilities::empty(),
            entry: EntryPolicy::Open,
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities |= capabilities;
        self
    }

    #[must_use]
    pub fn with_entry(mut self, entry: EntryPolicy) -> Self {
        self.entry = entry;
        self
    }

    pub fn is_combustible(&self) -> bool {
        self.capabilities.has(Capabilities::COMBUSTIBLE)
    }
}

/// Transient fire wrapping the ground it replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Burning {
    original: Ground,
    remaining: i32,
    damage: u32,
}

impl Burning {
    pub const GLYPH: char = 'w';
    pub const NAME: &'static str = "Fire";

    fn new(original: Ground) -> Self {
        Self {
            original,
            remaining: GameConfig::BURN_TURNS,
            damage: GameConfig::BURN_DAMAGE,
        }
    }

    pub fn original(&self) -> &Ground {
        &self.original
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }
}

/// What a terrain tick asks the map to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TerrainTick {
    /// Fire damage for a non-immune occupant.
    pub burn: Option<u32>,
    /// The tile returned to its original ground this tick.
    pub reverted: bool,
}

/// Terrain state carried by a location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Normal(Ground),
    Burning(Burning),
}

impl Terrain {
    pub fn glyph(&self) -> char {
        match self {
            Terrain::Normal(ground) => ground.glyph,
            Terrain::Burning(_) => Burning::GLYPH,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Terrain::Normal(ground) => &ground.name,
            Terrain::Burning(_) => Burning::NAME,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            Terrain::Normal(ground) => ground.capabilities,
            Terrain::Burning(_) => Capabilities::BURNING,
        }
    }

    pub fn is_burning(&self) -> bool {
        matches!(self, Terrain::Burning(_))
    }

    /// Entry check against the current state. Fire never blocks.
    pub fn admits(&self, actor: Capabilities) -> bool {
        match self {
            Terrain::Normal(ground) => ground.entry.admits(actor),
            Terrain::Burning(_) => true,
        }
    }

    /// Normal -> Burning. Returns `false` (and changes nothing) unless the
    /// current ground is combustible.
    pub fn ignite(&mut self) -> bool {
        match self {
            Terrain::Normal(ground) if ground.is_combustible() => {
                let original = ground.clone();
                *self = Terrain::Burning(Burning::new(original));
                true
            }
            _ => false,
        }
    }

    /// Advances the countdown by one world tick.
    pub fn tick(&mut self) -> TerrainTick {
        let Terrain::Burning(burning) = self else {
            return TerrainTick::default();
        };

        if burning.remaining < 0 {
            let original = burning.original.clone();
            *self = Terrain::Normal(original);
            return TerrainTick {
                burn: None,
                reverted: true,
            };
        }

        burning.remaining -= 1;
        TerrainTick {
            burn: Some(burning.damage),
            reverted: false,
        }
    }
}

impl From<Ground> for Terrain {
    fn from(ground: Ground) -> Self {
        Terrain::Normal(ground)
    }
}
