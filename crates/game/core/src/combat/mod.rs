//! Combat resolution system.
//!
//! Weapon attacks are resolved against the map in one call: hit roll, scaled
//! damage, the optional splash explosion and the knock-out of anyone whose
//! health crossed zero. Every random draw comes from the caller's [`Dice`].
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete attack resolution
//! - `check_hit`: roll against hit rate
//! - `scale_damage`: base damage times multiplier, rounded
//! - `detonate`: shockwave around the attacker
//!
//! [`Dice`]: crate::env::Dice

pub mod damage;
pub mod explosion;
pub mod hit;
pub mod result;

pub use damage::scale_damage;
pub use explosion::{ExplosionReport, detonate, should_explode};
pub use hit::check_hit;
pub use result::{AttackOutcome, AttackReport, resolve_attack};
