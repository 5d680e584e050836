//! Damage scaling.

/// Damage removed from the target: `round(damage * multiplier)`, never negative.
pub fn scale_damage(damage: u32, multiplier: f32) -> u32 {
    let scaled = (damage as f32 * multiplier).round();
    if scaled <= 0.0 { 0 } else { scaled as u32 }
}
