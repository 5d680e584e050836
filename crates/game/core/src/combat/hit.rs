//! Hit roll.

/// An attack connects when the roll is strictly below the hit rate.
///
/// `roll` is drawn uniformly from `[0, 100)`, so a hit rate of 0 never hits
/// and 100 always does.
#[inline]
pub fn check_hit(roll: u32, hit_rate: u32) -> bool {
    roll < hit_rate
}
