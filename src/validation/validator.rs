//! Field-level validation with first-failure reporting
//!
//! Presence is checked before validity: a form with any required field
//! missing is incomplete, whatever the other fields hold. Otherwise the
//! fields are checked in form order and only the first failure is
//! reported.

use std::fmt;

use crate::core::types::DieFace;
use crate::dice::RerollPolicy;
use crate::profiles::AttackProfile;
use crate::validation::input::{FieldValue, RawAttackInput};

/// Shown instead of results while the form is incomplete
pub const INCOMPLETE_PROMPT: &str = "Please enter all fields above to see results.";

/// Numeric attacker fields, in the order they are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Attacks,
    Damage,
    Ap,
    Strength,
    ToHit,
}

impl InputField {
    pub const ORDER: [InputField; 5] = [
        InputField::Attacks,
        InputField::Damage,
        InputField::Ap,
        InputField::Strength,
        InputField::ToHit,
    ];

    /// Form label for the field
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Attacks => "Attacks/Shots",
            InputField::Damage => "Damage",
            InputField::Ap => "AP",
            InputField::Strength => "Strength",
            InputField::ToHit => "To-Hit",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            InputField::Attacks => "Attacks/Shots must be a number zero or greater.",
            InputField::Damage => "Damage must be a number zero or greater.",
            InputField::Ap => "AP must be a whole number zero or greater.",
            InputField::Strength => "Strength must be a whole number greater than zero.",
            InputField::ToHit => "To-Hit must be a whole number between 1 and 6.",
        }
    }

    fn accepts(&self, value: f64) -> bool {
        match self {
            InputField::Attacks | InputField::Damage => value.is_finite() && value >= 0.0,
            InputField::Ap => is_whole(value) && value >= 0.0,
            InputField::Strength => is_whole(value) && value >= 1.0,
            InputField::ToHit => is_whole(value) && (1.0..=6.0).contains(&value),
        }
    }

    fn value<'a>(&self, input: &'a RawAttackInput) -> Option<&'a FieldValue> {
        let value = match self {
            InputField::Attacks => &input.attacks,
            InputField::Damage => &input.damage,
            InputField::Ap => &input.ap,
            InputField::Strength => &input.strength,
            InputField::ToHit => &input.to_hit,
        };
        value.as_ref().filter(|v| !v.is_blank())
    }
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// A present field holding a value outside its domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: InputField,
}

impl FieldError {
    pub fn new(field: InputField) -> Self {
        Self { field }
    }

    pub fn message(&self) -> &'static str {
        self.field.message()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why an input cannot be evaluated yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A required field, or the target selection, is missing
    Incomplete,
    /// The first field, in form order, that violates its rule
    Invalid(FieldError),
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Incomplete => f.write_str(INCOMPLETE_PROMPT),
            ValidationFailure::Invalid(err) => err.fmt(f),
        }
    }
}

/// An attack profile plus the targets it should be evaluated against
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub profile: AttackProfile,
    pub enemies: Vec<String>,
}

/// Check raw input, returning the failure if there is one
pub fn validate(input: &RawAttackInput) -> Option<ValidationFailure> {
    parse(input).err()
}

/// Validate raw input and build the attack profile from it
pub fn parse(input: &RawAttackInput) -> Result<ValidatedInput, ValidationFailure> {
    let all_present = InputField::ORDER
        .iter()
        .all(|field| field.value(input).is_some());
    let enemies = match &input.enemies {
        Some(enemies) if all_present => enemies.clone(),
        _ => return Err(ValidationFailure::Incomplete),
    };

    let mut values = [0.0; InputField::ORDER.len()];
    for (slot, field) in values.iter_mut().zip(InputField::ORDER) {
        let value = field.value(input).map_or(f64::NAN, FieldValue::as_number);
        if !field.accepts(value) {
            tracing::debug!("Rejected {}: {}", field.label(), value);
            return Err(ValidationFailure::Invalid(FieldError::new(field)));
        }
        *slot = value;
    }
    let [attacks, damage, ap, strength, to_hit] = values;

    // Whole-number checks above make these casts exact; huge values saturate.
    let profile = AttackProfile::new(
        attacks,
        to_hit as DieFace,
        strength as u32,
        ap as u32,
        damage,
        RerollPolicy::from_selection(input.reroll_hit.as_deref()),
        RerollPolicy::from_selection(input.reroll_wound.as_deref()),
    )
    .map_err(ValidationFailure::Invalid)?;

    Ok(ValidatedInput { profile, enemies })
}
