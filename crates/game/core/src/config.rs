use behavior_tree::Priority;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seed for the run's random oracle. Same seed, same rolls.
    pub seed: u64,
    /// Number of rounds a headless driver plays before stopping.
    pub turn_limit: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Eight neighbours per location on a square grid.
    pub const MAX_EXITS: usize = 8;

    // ===== combat policy =====
    /// Damage dealt to every bystander caught in an explosion.
    pub const SPLASH_DAMAGE: u32 = 50;
    /// Percentage chance that a splash-capable hit explodes.
    pub const EXPLOSION_CHANCE: u32 = 10;
    pub const DEFAULT_DAMAGE_MULTIPLIER: f32 = 1.0;

    // ===== terrain policy =====
    /// Countdown a burning tile starts with.
    pub const BURN_TURNS: i32 = 5;
    /// Damage a burning tile deals to a non-immune occupant per tick.
    pub const BURN_DAMAGE: u32 = 5;

    // ===== actions =====
    /// Turns covered by one rest offered to the player.
    pub const REST_TURNS: u32 = 3;

    // ===== behaviour slots =====
    pub const STOMP_PRIORITY: Priority = 1;
    pub const FOLLOW_PRIORITY: Priority = 999;
    pub const WANDER_PRIORITY: Priority = 999;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5EED_2099;
    pub const DEFAULT_TURN_LIMIT: u32 = 100;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            turn_limit: Self::DEFAULT_TURN_LIMIT,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
