//! Wound roll lookup: Strength vs Toughness
//!
//! Thresholds are compared by cross-multiplying the integers, which is
//! exact at every boundary (S/T == 2, 1 and 0.5).

use crate::core::types::DieFace;

/// Minimum d6 result needed to wound, 2 through 6
pub fn required_wound_roll(strength: u32, toughness: u32) -> DieFace {
    debug_assert!(toughness > 0, "toughness must be positive");
    let s = u64::from(strength);
    let t = u64::from(toughness);

    if s >= 2 * t {
        2
    } else if s > t {
        3
    } else if s == t {
        4
    } else if 2 * s > t {
        5
    } else {
        6
    }
}
