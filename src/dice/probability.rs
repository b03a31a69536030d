//! Primitive probabilities for a single fair six-sided die
//!
//! Targets run 1..=7. A target of 7 can never be rolled, which is how
//! "no save" is represented downstream.

use crate::core::types::{DieFace, NO_SAVE};

/// Probability that one roll is at least `target`
pub fn probability_at_least(target: DieFace) -> f64 {
    debug_assert!((1..=NO_SAVE).contains(&target), "roll target out of range: {target}");
    f64::from(7 - target) / 6.0
}

/// Probability that one roll is strictly below `target`
pub fn probability_less_than(target: DieFace) -> f64 {
    debug_assert!((1..=NO_SAVE).contains(&target), "roll target out of range: {target}");
    f64::from(target - 1) / 6.0
}
