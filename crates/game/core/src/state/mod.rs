//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the map, its actors and
//! items, and the turn bookkeeping. Runtime layers query this state but mutate
//! it through the engine and the action layer.
mod error;
pub mod types;

pub use error::MapError;
pub use types::{
    Actor, Attribute, AttributeKind, AttributeOp, AttributeStore, Burning, Capabilities,
    Consumption, Controller, EdibleEffect, EdibleItem, EntityId, EntryPolicy, Exit, GameMap, Ground,
    Harm, Item, ItemId, ItemKind, Location, Position, Splash, Terrain, TerrainTick, TurnState,
    Weapon, WeaponItem,
};

/// Canonical snapshot of the game state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `turn.nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// The grid together with every actor and item on it.
    pub map: GameMap,

    /// Turn bookkeeping and pending continuations.
    pub turn: TurnState,
}

impl GameState {
    pub fn new(game_seed: u64, map: GameMap) -> Self {
        Self {
            game_seed,
            map,
            turn: TurnState::new(),
        }
    }

    pub fn player(&self) -> Option<&Actor> {
        self.map.actor(EntityId::PLAYER)
    }

    /// True while the player is registered and conscious.
    pub fn is_player_conscious(&self) -> bool {
        self.player().is_some_and(Actor::is_conscious)
    }
}
