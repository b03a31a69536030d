//! Expected successes for a batch of dice under a reroll policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::types::DieFace;
use crate::dice::probability::{probability_at_least, probability_less_than};

/// Which failed rolls may be rolled again
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RerollPolicy {
    /// Keep every roll
    #[default]
    None,
    /// Reroll natural 1s only
    Ones,
    /// Reroll every failed roll once
    All,
}

impl RerollPolicy {
    /// Parse a form selection. Anything unrecognised means no rerolls.
    pub fn from_selection(selection: Option<&str>) -> Self {
        selection.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RerollPolicy::None => "none",
            RerollPolicy::Ones => "ones",
            RerollPolicy::All => "all",
        }
    }
}

impl FromStr for RerollPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(RerollPolicy::None),
            "ones" => Ok(RerollPolicy::Ones),
            "all" => Ok(RerollPolicy::All),
            other => Err(format!("unknown reroll policy: {other}")),
        }
    }
}

impl fmt::Display for RerollPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability that a single die still fails after the reroll policy applies
fn failure_probability(required_roll: DieFace, policy: RerollPolicy) -> f64 {
    let first_miss = probability_less_than(required_roll);
    match policy {
        RerollPolicy::None => first_miss,
        RerollPolicy::Ones => {
            // Each face in the miss band is equally likely, so a 1 is
            // 1/(r-1) of the miss mass.
            let miss_was_one = first_miss / f64::from(required_roll - 1);
            first_miss - miss_was_one * probability_at_least(required_roll)
        }
        // Squared miss probability: fail the roll, then fail the reroll.
        RerollPolicy::All => first_miss * first_miss,
    }
}

/// Expected number of successes when `number_rolled` dice need `required_roll`
///
/// `number_rolled` may be fractional since it is often the expectation
/// from an earlier step. A required roll of 1 always succeeds, so the
/// policy is irrelevant and the input is returned untouched.
pub fn expected_successes(required_roll: DieFace, number_rolled: f64, policy: RerollPolicy) -> f64 {
    if required_roll <= 1 {
        return number_rolled;
    }
    number_rolled * (1.0 - failure_probability(required_roll, policy))
}
