use crate::config::GameConfig;

/// Secondary area effect attached to a weapon.
///
/// After a hit, the resolver rolls once more; below `chance` the attacker's
/// surroundings are hit by a shockwave dealing `damage` to every bystander and
/// igniting combustible ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Splash {
    pub chance: u32,
    pub damage: u32,
}

impl Default for Splash {
    fn default() -> Self {
        Self {
            chance: GameConfig::EXPLOSION_CHANCE,
            damage: GameConfig::SPLASH_DAMAGE,
        }
    }
}

/// Damage profile shared by intrinsic and item-backed weapons.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    /// Base damage (positive).
    pub damage: u32,
    /// Percentage chance to connect, 0..=100.
    pub hit_rate: u32,
    /// Display-only verb ("stomps", "slashes").
    pub verb: String,
    pub multiplier: f32,
    pub splash: Option<Splash>,
}

impl Weapon {
    pub fn new(damage: u32, verb: impl Into<String>, hit_rate: u32) -> Self {
        Self {
            damage,
            hit_rate: hit_rate.min(100),
            verb: verb.into(),
            multiplier: GameConfig::DEFAULT_DAMAGE_MULTIPLIER,
            splash: None,
        }
    }

    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_splash(mut self, splash: Splash) -> Self {
        self.splash = Some(splash);
        self
    }

    /// Damage actually removed from the target: `round(damage * multiplier)`.
    pub fn scaled_damage(&self) -> u32 {
        crate::combat::scale_damage(self.damage, self.multiplier)
    }
}
