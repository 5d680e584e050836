//! Game content for the Gravesite Plain and loaders for data files.
//!
//! - Catalog of grounds, weapons, edibles and actor templates
//! - Text map layouts
//! - Scenarios (layout plus placements), built in or from RON
//! - Game configuration from TOML
//!
//! Everything here produces `gravesite-core` types; the rules stay in core.

pub mod catalog;
pub mod error;
pub mod layout;
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ActorKind, ItemCatalog};
pub use error::ContentError;
pub use layout::parse_layout;
pub use scenario::{
    ActorPlacement, ItemPlacement, ScenarioSpec, gravesite_plain, gravesite_plain_spec,
};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapLoader, ScenarioLoader};
