//! Deterministic rules of a turn-based grid combat game.
//!
//! `gravesite-core` owns the world model (map, actors, items, terrain), the
//! combat resolver, behaviour-driven decision making, the action layer and the
//! turn loop. Every random decision is drawn from an injected
//! [`env::RngOracle`], so a run replays exactly from its seed. Content (maps,
//! catalogs, loaders) lives in a separate crate that builds on the types
//! re-exported here.
pub mod action;
pub mod behaviour;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionTransition, AttackAction, ConsumeAction, FollowAction,
    MoveAction, PickUpAction, RestAction, WeaponSource, available_actions,
};
pub use behaviour::{Behaviour, BehaviourSet, DecisionContext};
pub use combat::{AttackOutcome, AttackReport, ExplosionReport, resolve_attack};
pub use config::GameConfig;
pub use engine::{GameEngine, Idle, PlayerController, RoundReport, TurnError, TurnRecord};
pub use env::{Dice, PcgRng, RngOracle, ScriptedRng, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Actor, Attribute, AttributeKind, AttributeOp, AttributeStore, Burning, Capabilities,
    Consumption, Controller, EdibleEffect, EdibleItem, EntityId, EntryPolicy, Exit, GameMap,
    GameState, Ground, Harm, Item, ItemId, ItemKind, Location, MapError, Position, Splash, Terrain,
    TerrainTick, TurnState, Weapon, WeaponItem,
};
