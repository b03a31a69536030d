//! Hit → wound → save → damage pipeline for one attacker/defender pair
//!
//! Inputs arrive already validated, so nothing here can fail.

use crate::combat::result::CombatResult;
use crate::combat::wound_table::required_wound_roll;
use crate::core::types::DieFace;
use crate::dice::{expected_successes, probability_at_least};
use crate::profiles::{AttackProfile, DefenderProfile};

/// Every intermediate expectation of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct CombatBreakdown {
    pub hits: f64,
    pub required_wound_roll: DieFace,
    pub wounds: f64,
    pub best_save: DieFace,
    pub unsaved_wounds: f64,
    /// Damage that lands after excess per-model damage is discarded
    pub wounds_lost: f64,
    pub models_lost: f64,
}

/// Run the full pipeline, keeping each step
pub fn compute_breakdown(attack: &AttackProfile, defender: &DefenderProfile) -> CombatBreakdown {
    let hits = expected_successes(attack.to_hit(), attack.attacks(), attack.reroll_hit());

    let wound_roll = required_wound_roll(attack.strength(), defender.toughness());
    let wounds = expected_successes(wound_roll, hits, attack.reroll_wound());

    let best_save = defender.best_save(attack.ap());
    let unsaved_wounds = wounds - wounds * probability_at_least(best_save);

    // A model cannot lose more wounds than it has
    let damage_per_wound = attack.damage().min(defender.wounds_per_model());
    let wounds_lost = unsaved_wounds * damage_per_wound;
    let models_lost = wounds_lost / defender.wounds_per_model();

    CombatBreakdown {
        hits,
        required_wound_roll: wound_roll,
        wounds,
        best_save,
        unsaved_wounds,
        wounds_lost,
        models_lost,
    }
}

/// Expected wounds caused and models destroyed
pub fn compute_outcome(attack: &AttackProfile, defender: &DefenderProfile) -> CombatResult {
    let breakdown = compute_breakdown(attack, defender);
    CombatResult {
        defender_name: defender.name().to_string(),
        expected_wounds: breakdown.wounds_lost,
        expected_models_lost: breakdown.models_lost,
    }
}
