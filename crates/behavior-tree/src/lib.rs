//! Lightweight priority-ordered behavior selection for turn-based games.
//!
//! Every behavior is a pure decision strategy: it looks at a context and either
//! proposes one output (usually an action) or declines. Behaviors are stored
//! under integer priority keys and evaluated in ascending key order, so the
//! lowest key that produces a proposal wins.
//!
//! - **No delta time**: every evaluation completes immediately (turn-based semantics)
//! - **No Running state**: a behavior either proposes or declines
//! - **Deterministic ordering**: priorities live in an ordered map, never a hash map
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all decision strategies
//! - [`PrioritySelector`]: keyed collection evaluated lowest-key-first
//! - [`Selection`]: the winning proposal together with the key that produced it

pub mod behavior;
pub mod composite;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Priority, PrioritySelector, Selection};
