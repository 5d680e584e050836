//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in a run (hit rolls, explosion rolls, wander picks)
//! is drawn from one injected [`RngOracle`]. The oracle is read-only: each
//! draw derives a fresh seed from the run seed, the action nonce, the acting
//! entity and a per-action draw counter, so replaying a run with the same seed
//! reproduces every roll.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::state::EntityId;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentage in `[0, 100)`.
    ///
    /// Hit-rate and trigger-chance checks succeed when the roll is strictly
    /// below the rate.
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// Pick an index in `[0, len)`. Returns 0 when `len` is 0 or 1.
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. The generator itself is stateless: all state lives in the
/// seed passed to each call.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Oracle that replays a fixed sequence of values, ignoring the seed.
///
/// Useful to pin hit and explosion rolls in tests and scripted replays. The
/// sequence wraps around when exhausted.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

/// Compute deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Action sequence number (increments each action)
/// * `actor_id` - Entity performing the action
/// * `context` - Draw counter within the action
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Random draws scoped to one actor's action.
///
/// A `Dice` is created by the turn driver for each action and threaded
/// explicitly through behaviour selection and action execution. Every draw
/// advances the context counter, so two draws within one action are
/// independent while the whole sequence stays reproducible.
pub struct Dice<'r> {
    oracle: &'r dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    actor: EntityId,
    context: u32,
}

impl<'r> Dice<'r> {
    pub fn new(oracle: &'r dyn RngOracle, game_seed: u64, nonce: u64, actor: EntityId) -> Self {
        Self {
            oracle,
            game_seed,
            nonce,
            actor,
            context: 0,
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, self.actor.0, self.context);
        self.context = self.context.wrapping_add(1);
        seed
    }

    /// Uniform integer in `[0, 100)`.
    pub fn percent(&mut self) -> u32 {
        let seed = self.next_seed();
        self.oracle.roll_percent(seed)
    }

    /// Uniform index in `[0, len)`.
    pub fn pick(&mut self, len: usize) -> usize {
        let seed = self.next_seed();
        self.oracle.pick(seed, len)
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u32 {
        self.context
    }
}

impl core::fmt::Debug for Dice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dice")
            .field("game_seed", &self.game_seed)
            .field("nonce", &self.nonce)
            .field("actor", &self.actor)
            .field("context", &self.context)
            .finish()
    }
}
