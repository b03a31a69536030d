//! Defender profiles: toughness, saves and wounds per model
//!
//! Fields are private and every public way in (the constructor and
//! deserialization) checks the ranges the damage pipeline relies on.

use serde::{Deserialize, Serialize};

use crate::core::error::{MathhammerError, Result};
use crate::core::types::{DieFace, NO_SAVE};

/// One kind of target model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefenderRecord")]
pub struct DefenderProfile {
    name: String,
    description: String,
    toughness: u32,
    armor_save: DieFace,
    invulnerable_save: DieFace,
    wounds_per_model: f64,
}

/// Unchecked on-disk shape of a profile
#[derive(Debug, Deserialize)]
struct DefenderRecord {
    name: String,
    #[serde(default)]
    description: String,
    toughness: u32,
    armor_save: DieFace,
    #[serde(default = "no_save")]
    invulnerable_save: DieFace,
    wounds_per_model: f64,
}

fn no_save() -> DieFace {
    NO_SAVE
}

impl TryFrom<DefenderRecord> for DefenderProfile {
    type Error = MathhammerError;

    fn try_from(record: DefenderRecord) -> Result<Self> {
        Self::new(
            record.name,
            record.description,
            record.toughness,
            record.armor_save,
            record.invulnerable_save,
            record.wounds_per_model,
        )
    }
}

impl DefenderProfile {
    /// Build a profile, rejecting values outside the pipeline's ranges
    ///
    /// Saves run 1 to 7, where 7 means no save of that kind.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        toughness: u32,
        armor_save: DieFace,
        invulnerable_save: DieFace,
        wounds_per_model: f64,
    ) -> Result<Self> {
        let profile = Self::preset(
            name,
            description,
            toughness,
            armor_save,
            invulnerable_save,
            wounds_per_model,
        );
        profile.check()?;
        Ok(profile)
    }

    /// Built-in profiles whose values are fixed in source
    pub(crate) fn preset(
        name: impl Into<String>,
        description: impl Into<String>,
        toughness: u32,
        armor_save: DieFace,
        invulnerable_save: DieFace,
        wounds_per_model: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            toughness,
            armor_save,
            invulnerable_save,
            wounds_per_model,
        }
    }

    fn check(&self) -> Result<()> {
        let invalid = |reason: &str| MathhammerError::InvalidDefender {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.toughness == 0 {
            return Err(invalid("toughness must be greater than zero"));
        }
        if !(1..=NO_SAVE).contains(&self.armor_save) {
            return Err(invalid("armor save must be between 1 and 7"));
        }
        if !(1..=NO_SAVE).contains(&self.invulnerable_save) {
            return Err(invalid("invulnerable save must be between 1 and 7"));
        }
        if !(self.wounds_per_model.is_finite() && self.wounds_per_model > 0.0) {
            return Err(invalid("wounds per model must be greater than zero"));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human label shown next to the name
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn toughness(&self) -> u32 {
        self.toughness
    }

    /// Armor save target, 7 for none
    pub fn armor_save(&self) -> DieFace {
        self.armor_save
    }

    /// Invulnerable save target, 7 for none
    pub fn invulnerable_save(&self) -> DieFace {
        self.invulnerable_save
    }

    pub fn wounds_per_model(&self) -> f64 {
        self.wounds_per_model
    }

    /// Save the defender actually rolls against `ap`
    ///
    /// AP raises the armor target; the invulnerable save ignores it. The
    /// result never exceeds 7.
    pub fn best_save(&self, ap: u32) -> DieFace {
        let modified_armor = u32::from(self.armor_save).saturating_add(ap);
        let best = modified_armor.min(u32::from(self.invulnerable_save));
        best.min(u32::from(NO_SAVE)) as DieFace
    }

    /// "MEQ - Space Marine Equivalent", or just the name without a description
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.description)
        }
    }
}
