//! Expected outcome of one attack profile against one defender

use serde::{Serialize, Serializer};

/// Expected wounds and models lost against one defender
///
/// Values keep full precision; rounding happens only for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatResult {
    pub defender_name: String,
    pub expected_wounds: f64,
    pub expected_models_lost: f64,
}

impl CombatResult {
    /// Expected wounds at the given number of decimal places
    pub fn wounds_display(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.expected_wounds)
    }

    /// Expected models lost at the given number of decimal places
    pub fn models_display(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.expected_models_lost)
    }

    /// Copy of the result with both values rounded, for serialized output
    pub fn rounded(&self, precision: usize) -> RoundedResult<'_> {
        RoundedResult {
            result: self,
            precision,
        }
    }
}

/// Serializes a [`CombatResult`] with values rounded to a precision
#[derive(Debug, Clone, Copy)]
pub struct RoundedResult<'a> {
    result: &'a CombatResult,
    precision: usize,
}

fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision.min(15) as i32);
    (value * scale).round() / scale
}

impl Serialize for RoundedResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CombatResult {
            defender_name: self.result.defender_name.clone(),
            expected_wounds: round_to(self.result.expected_wounds, self.precision),
            expected_models_lost: round_to(self.result.expected_models_lost, self.precision),
        }
        .serialize(serializer)
    }
}
