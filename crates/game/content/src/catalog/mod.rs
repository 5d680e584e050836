//! Concrete content of the Gravesite Plain: grounds, weapons, edibles and
//! actor templates.
//!
//! Everything here is a plain constructor returning core types. Numbers are
//! content, not rules; the rules live in `gravesite-core`.

mod actors;
mod items;
mod terrain;

pub use actors::{ActorKind, bare_fist, bare_stomp, furnace_golem, tarnished};
pub use items::{
    ItemCatalog, flask_of_healing, flask_of_rejuvenation, great_knife, shadowtree_fragment,
    short_sword,
};
pub use terrain::{dirt, floor, ground_for_glyph, puddle, wall};
