//! Combat result types and attack resolution.

use std::fmt;

use crate::env::Dice;
use crate::state::{EntityId, GameMap, Weapon};

use super::explosion::{ExplosionReport, detonate, should_explode};
use super::hit::check_hit;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,

    /// Health actually removed from the target by the blow itself.
    pub dealt: u32,

    /// Present when the weapon's splash went off.
    pub explosion: Option<ExplosionReport>,

    /// Knock-out announcements, in the order they happened.
    pub knockouts: Vec<String>,

    summary: String,
    shockwave: Option<String>,
}

impl AttackReport {
    fn miss(attacker: &str, target: &str) -> Self {
        Self {
            outcome: AttackOutcome::Miss,
            dealt: 0,
            explosion: None,
            knockouts: Vec::new(),
            summary: format!("{attacker} misses {target}."),
            shockwave: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)?;
        if let Some(shockwave) = &self.shockwave {
            write!(f, "\n{shockwave}")?;
        }
        for knockout in &self.knockouts {
            write!(f, "\n{knockout}")?;
        }
        Ok(())
    }
}

/// Resolves `attacker` striking `target` with `weapon`.
///
/// # Sequence
///
/// 1. Roll `[0, 100)`; at or above the hit rate the attack misses.
/// 2. On a hit the target loses `round(damage * multiplier)` health.
/// 3. A splash weapon rolls again and may detonate around the attacker.
/// 4. Any actor whose health crossed 0 is knocked out exactly once.
///
/// The caller guarantees the target is on the map; a missing target is logged
/// and reported as a miss without touching the world.
pub fn resolve_attack(
    map: &mut GameMap,
    attacker: EntityId,
    target: EntityId,
    weapon: &Weapon,
    dice: &mut Dice<'_>,
) -> AttackReport {
    let attacker_name = map.actor(attacker).map(|a| a.name().to_owned()).unwrap_or_default();
    let target_name = map.actor(target).map(|t| t.name().to_owned()).unwrap_or_default();

    if !map.contains(target) {
        tracing::warn!(%attacker, %target, "attack target is not on the map");
        return AttackReport::miss(&attacker_name, &target_name);
    }

    let roll = dice.percent();
    let hit = check_hit(roll, weapon.hit_rate);
    tracing::debug!(%attacker, %target, roll, hit_rate = weapon.hit_rate, hit, "hit roll");
    if !hit {
        return AttackReport::miss(&attacker_name, &target_name);
    }

    let mut knockouts = Vec::new();
    let dealt = match map.hurt(target, weapon.scaled_damage(), &attacker_name) {
        Some(harm) => {
            knockouts.extend(harm.knockout);
            harm.dealt
        }
        None => 0,
    };

    let mut explosion = None;
    let mut shockwave = None;
    if let Some(splash) = weapon.splash {
        let roll = dice.percent();
        tracing::debug!(%attacker, roll, chance = splash.chance, "explosion roll");
        if should_explode(roll, splash)
            && let Some(report) = detonate(map, attacker, splash)
        {
            knockouts.extend(report.knockouts.iter().cloned());
            shockwave = Some(format!(
                "{attacker_name}'s attack results in a shockwave in the surrounding environment."
            ));
            explosion = Some(report);
        }
    }

    AttackReport {
        outcome: AttackOutcome::Hit,
        dealt,
        explosion,
        knockouts,
        summary: format!(
            "{attacker_name} {} {target_name} for {} damage",
            weapon.verb, weapon.damage
        ),
        shockwave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};
    use crate::state::{Actor, AttributeStore, Capabilities, Ground, Position, Splash};

    fn dirt() -> Ground {
        Ground::new('.', "Dirt")
            .with_capabilities(Capabilities::COMBUSTIBLE)
    }

    fn arena() -> GameMap {
        let mut map = GameMap::new("Arena", vec![vec![dirt(); 3]; 3])
            .expect("layout");
        let golem = Actor::player(
            EntityId(1),
            "Furnace Golem",
            'A',
            AttributeStore::with_health(1000),
            stomp(),
        );
        let tarnished = Actor::player(
            EntityId::PLAYER,
            "Tarnished",
            '@',
            AttributeStore::with_health(150),
            Weapon::new(25, "punches", 50),
        );
        map.add_actor(golem, Position::new(1, 1)).expect("free");
        map.add_actor(tarnished, Position::new(2, 1)).expect("free");
        map
    }

    fn stomp() -> Weapon {
        Weapon::new(100, "stomps", 5).with_splash(Splash::default())
    }

    fn health(map: &GameMap, id: EntityId) -> u32 {
        map.actor(id).map(Actor::health).unwrap_or_default()
    }

    #[test]
    fn miss_changes_nothing() {
        let mut map = arena();
        let before = map.clone();
        let rng = ScriptedRng::new(vec![5]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));

        let report = resolve_attack(&mut map, EntityId(1), EntityId::PLAYER, &stomp(), &mut dice);

        assert_eq!(report.outcome, AttackOutcome::Miss);
        assert_eq!(report.to_string(), "Furnace Golem misses Tarnished.");
        assert_eq!(map, before);
    }

    #[test]
    fn hit_applies_scaled_damage_but_reports_base() {
        let mut map = arena();
        let rng = ScriptedRng::new(vec![0]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId::PLAYER);
        let fist = Weapon::new(25, "punches", 50).with_multiplier(2.0);

        let report = resolve_attack(&mut map, EntityId::PLAYER, EntityId(1), &fist, &mut dice);

        assert!(report.is_hit());
        assert_eq!(report.dealt, 50);
        assert_eq!(health(&map, EntityId(1)), 950);
        assert_eq!(
            report.to_string(),
            "Tarnished punches Furnace Golem for 25 damage"
        );
        // No splash, so exactly one roll
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn explosion_hits_target_twice_and_burns_surroundings() {
        let mut map = arena();
        let rng = ScriptedRng::new(vec![0, 0]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));

        let report = resolve_attack(&mut map, EntityId(1), EntityId::PLAYER, &stomp(), &mut dice);

        // 100 from the stomp, then 50 splash clamps at zero
        assert_eq!(health(&map, EntityId::PLAYER), 0);
        assert_eq!(health(&map, EntityId(1)), 1000);
        let explosion = report.explosion.as_ref().expect("explosion fired");
        assert_eq!(explosion.struck, vec![(EntityId::PLAYER, 50)]);
        assert_eq!(explosion.ignited.len(), 8);
        assert_eq!(
            report.to_string(),
            "Furnace Golem stomps Tarnished for 100 damage\n\
             Furnace Golem's attack results in a shockwave in the surrounding environment.\n\
             Tarnished met their demise at the hands of Furnace Golem"
        );
        assert!(!map.contains(EntityId::PLAYER));
    }

    #[test]
    fn lethal_blow_announces_knockout_once() {
        let mut map = arena();
        let rng = ScriptedRng::new(vec![0, 99]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));
        let heavy = Weapon::new(500, "crushes", 100);

        let report = resolve_attack(&mut map, EntityId(1), EntityId::PLAYER, &heavy, &mut dice);

        assert_eq!(report.dealt, 150);
        assert_eq!(report.knockouts.len(), 1);
        let player = map.actor(EntityId::PLAYER).expect("still in roster");
        assert!(player.is_knocked_out());
    }

    #[test]
    fn absent_target_is_a_logged_miss() {
        let mut map = arena();
        let rng = ScriptedRng::new(vec![0]);
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));

        let report = resolve_attack(&mut map, EntityId(1), EntityId(42), &stomp(), &mut dice);

        assert_eq!(report.outcome, AttackOutcome::Miss);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn explosion_rate_converges_to_ten_percent() {
        let rng = PcgRng;
        let sure_hit = Weapon::new(1, "taps", 100).with_splash(Splash::default());
        let template = arena();
        let trials = 10_000u64;

        let mut explosions = 0;
        for nonce in 0..trials {
            let mut map = template.clone();
            let mut dice = Dice::new(&rng, 0xC0FFEE, nonce, EntityId(1));
            let report = resolve_attack(
                &mut map,
                EntityId(1),
                EntityId::PLAYER,
                &sure_hit,
                &mut dice,
            );
            if report.explosion.is_some() {
                explosions += 1;
            }
        }

        let rate = explosions as f64 / trials as f64;
        assert!((0.08..=0.12).contains(&rate), "explosion rate {rate}");
    }
}
