pub mod actor;
pub mod attributes;
pub mod capabilities;
pub mod common;
pub mod item;
pub mod map;
pub mod terrain;
pub mod turn;
pub mod weapon;

pub use actor::{Actor, Controller};
pub use attributes::{Attribute, AttributeKind, AttributeOp, AttributeStore};
pub use capabilities::Capabilities;
pub use common::{EntityId, ItemId, Position};
pub use item::{Consumption, EdibleEffect, EdibleItem, Item, ItemKind, WeaponItem};
pub use map::{Exit, GameMap, Harm, Location};
pub use terrain::{Burning, EntryPolicy, Ground, Terrain, TerrainTick};
pub use turn::TurnState;
pub use weapon::{Splash, Weapon};
