//! Unvalidated attacker input as a presentation layer supplies it
//!
//! Every field is optional: an absent field means the user has not filled
//! it in yet. Values may arrive as numbers or as text.

use serde::{Deserialize, Serialize};

/// A single form value, typed as a number or as raw text
///
/// A JSON boolean is kept as a present field so that it fails its
/// field's check instead of the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Numeric reading of the value; unparseable text is NaN
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            FieldValue::Flag(_) => f64::NAN,
        }
    }

    /// Blank text counts as an unfilled field
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Field name to value mapping for one attack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAttackInput {
    pub attacks: Option<FieldValue>,
    #[serde(alias = "tohit")]
    pub to_hit: Option<FieldValue>,
    pub strength: Option<FieldValue>,
    pub ap: Option<FieldValue>,
    pub damage: Option<FieldValue>,
    #[serde(alias = "rerollHit")]
    pub reroll_hit: Option<String>,
    #[serde(alias = "rerollWound")]
    pub reroll_wound: Option<String>,
    /// Selected defender names, in display order
    pub enemies: Option<Vec<String>>,
}

impl RawAttackInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attacks(mut self, value: impl Into<FieldValue>) -> Self {
        self.attacks = Some(value.into());
        self
    }

    pub fn to_hit(mut self, value: impl Into<FieldValue>) -> Self {
        self.to_hit = Some(value.into());
        self
    }

    pub fn strength(mut self, value: impl Into<FieldValue>) -> Self {
        self.strength = Some(value.into());
        self
    }

    pub fn ap(mut self, value: impl Into<FieldValue>) -> Self {
        self.ap = Some(value.into());
        self
    }

    pub fn damage(mut self, value: impl Into<FieldValue>) -> Self {
        self.damage = Some(value.into());
        self
    }

    pub fn reroll_hit(mut self, policy: impl Into<String>) -> Self {
        self.reroll_hit = Some(policy.into());
        self
    }

    pub fn reroll_wound(mut self, policy: impl Into<String>) -> Self {
        self.reroll_wound = Some(policy.into());
        self
    }

    pub fn enemies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enemies = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Parse raw input from a JSON object
    pub fn from_json(json: &str) -> crate::core::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
