//! Text and JSON rendering of evaluations

use serde_json::json;

use crate::calculator::Evaluation;
use crate::combat::CombatResult;
use crate::core::error::Result;
use crate::core::types::{DieFace, NO_SAVE};
use crate::profiles::{DefenderCatalog, DefenderProfile};
use crate::validation::INCOMPLETE_PROMPT;

/// One sentence describing a result
pub fn summary_line(result: &CombatResult, precision: usize) -> String {
    format!(
        "Average damage caused to {}: {} wounds caused which kills {} models.",
        result.defender_name,
        result.wounds_display(precision),
        result.models_display(precision)
    )
}

/// Full text for an evaluation: one line per result, or the prompt/error
pub fn render(evaluation: &Evaluation, precision: usize) -> String {
    match evaluation {
        Evaluation::Results(results) => results
            .iter()
            .map(|r| summary_line(r, precision))
            .collect::<Vec<_>>()
            .join("\n"),
        Evaluation::Incomplete => INCOMPLETE_PROMPT.to_string(),
        Evaluation::Invalid(message) => message.clone(),
    }
}

/// JSON document for an evaluation, values rounded to `precision`
pub fn to_json(evaluation: &Evaluation, precision: usize) -> Result<String> {
    let value = match evaluation {
        Evaluation::Results(results) => {
            let rows: Vec<_> = results.iter().map(|r| r.rounded(precision)).collect();
            json!({ "status": "ok", "results": rows })
        }
        Evaluation::Incomplete => json!({ "status": "incomplete", "message": INCOMPLETE_PROMPT }),
        Evaluation::Invalid(message) => json!({ "status": "invalid", "message": message }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn save_label(save: DieFace) -> String {
    if save >= NO_SAVE {
        "-".to_string()
    } else {
        format!("{save}+")
    }
}

fn defender_line(profile: &DefenderProfile) -> String {
    format!(
        "{}: T{} Sv {} Inv {} W{}",
        profile.label(),
        profile.toughness(),
        save_label(profile.armor_save()),
        save_label(profile.invulnerable_save()),
        profile.wounds_per_model()
    )
}

/// Listing of every selectable target
pub fn catalog_listing(catalog: &DefenderCatalog) -> String {
    catalog
        .all()
        .iter()
        .map(defender_line)
        .collect::<Vec<_>>()
        .join("\n")
}
