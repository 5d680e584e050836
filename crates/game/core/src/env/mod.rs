//! Injected services consumed by the simulation.
//!
//! The only service the core needs from its host is randomness. It is exposed
//! as the read-only [`RngOracle`] trait so tests can script rolls and runs can
//! be replayed from a seed.
mod rng;

pub use rng::{Dice, PcgRng, RngOracle, ScriptedRng, compute_seed};
