//! Shockwave triggered by splash-capable weapons.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::{EntityId, Exit, GameMap, Position, Splash};

/// An explosion goes off when the roll is strictly below the splash chance.
#[inline]
pub fn should_explode(roll: u32, splash: Splash) -> bool {
    roll < splash.chance
}

/// What a shockwave did to the attacker's surroundings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplosionReport {
    /// Actors caught by the blast with the damage actually removed.
    pub struck: Vec<(EntityId, u32)>,
    /// Locations whose ground caught fire.
    pub ignited: Vec<Position>,
    /// Announcements of actors the blast knocked out.
    pub knockouts: Vec<String>,
}

/// Hits every exit around `attacker`: other actors there take the splash
/// damage and combustible ground ignites.
///
/// Returns `None` if the attacker is not on the map.
pub fn detonate(map: &mut GameMap, attacker: EntityId, splash: Splash) -> Option<ExplosionReport> {
    let origin = map.location_of(attacker)?;
    let by = map.actor(attacker)?.name().to_owned();
    let exits: ArrayVec<Exit, { GameConfig::MAX_EXITS }> =
        map.exits(origin).iter().copied().collect();

    let mut report = ExplosionReport::default();
    for exit in exits {
        if let Some(bystander) = map.actor_at(exit.destination)
            && bystander != attacker
            && let Some(harm) = map.hurt(bystander, splash.damage, &by)
        {
            tracing::debug!(actor = %bystander, damage = harm.dealt, "caught in shockwave");
            report.struck.push((bystander, harm.dealt));
            report.knockouts.extend(harm.knockout);
        }
        if map.ignite(exit.destination) {
            report.ignited.push(exit.destination);
        }
    }

    tracing::info!(
        attacker = %attacker,
        struck = report.struck.len(),
        ignited = report.ignited.len(),
        "shockwave"
    );
    Some(report)
}
