//! Evaluate one attack profile against a list of defenders

use crate::combat::damage::compute_outcome;
use crate::combat::result::CombatResult;
use crate::core::error::Result;
use crate::profiles::{AttackProfile, DefenderCatalog};

/// One result per defender name, in the order the names were given
///
/// Fails with `UnknownDefender` on the first name missing from the
/// catalog; no partial results are returned.
pub fn evaluate<S: AsRef<str>>(
    attack: &AttackProfile,
    defender_names: &[S],
    catalog: &DefenderCatalog,
) -> Result<Vec<CombatResult>> {
    defender_names
        .iter()
        .map(|name| {
            let defender = catalog.require(name.as_ref())?;
            let result = compute_outcome(attack, defender);
            tracing::debug!(
                "{}: {:.4} wounds, {:.4} models",
                result.defender_name,
                result.expected_wounds,
                result.expected_models_lost
            );
            Ok(result)
        })
        .collect()
}
