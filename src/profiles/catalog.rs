//! Named table of defender profiles
//!
//! The catalog is built once and then passed by reference into the
//! evaluator. It is never global.

use ahash::AHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::error::{MathhammerError, Result};
use crate::core::types::NO_SAVE;
use crate::profiles::defender::DefenderProfile;

/// Ordered defender profiles with lookup by name
#[derive(Debug, Clone, Default)]
pub struct DefenderCatalog {
    profiles: Vec<DefenderProfile>,
    by_name: AHashMap<String, usize>,
}

/// On-disk layout: a list of `[[defender]]` tables, each range-checked
/// as it is deserialized
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    defender: Vec<DefenderProfile>,
}

impl DefenderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six standard target profiles
    pub fn with_defaults() -> Self {
        let defaults = [
            DefenderProfile::preset("MEQ", "Space Marine Equivalent", 4, 3, NO_SAVE, 1.0),
            DefenderProfile::preset("TEQ", "Terminator Equivalent", 4, 2, 5, 2.0),
            DefenderProfile::preset("GEQ", "Guardsmen Equivalent", 3, 5, NO_SAVE, 1.0),
            DefenderProfile::preset("Ork", "Ork Boyz", 4, 6, NO_SAVE, 1.0),
            DefenderProfile::preset("Tank", "Leman Russ Equivalent", 8, 3, NO_SAVE, 12.0),
            DefenderProfile::preset("Knight", "Imperial Knight Questoris", 8, 3, 5, 28.0),
        ];

        let mut catalog = Self::new();
        for profile in defaults {
            catalog.index(profile);
        }
        catalog
    }

    /// Build a catalog from profiles, rejecting duplicate names
    pub fn from_profiles(profiles: impl IntoIterator<Item = DefenderProfile>) -> Result<Self> {
        let mut catalog = Self::new();
        for profile in profiles {
            catalog.add(profile)?;
        }
        Ok(catalog)
    }

    /// Add a profile, failing if the name is already taken
    pub fn add(&mut self, profile: DefenderProfile) -> Result<()> {
        if self.by_name.contains_key(profile.name()) {
            return Err(MathhammerError::DuplicateDefender(profile.name().to_string()));
        }
        self.index(profile);
        Ok(())
    }

    fn index(&mut self, profile: DefenderProfile) {
        self.by_name.insert(profile.name().to_string(), self.profiles.len());
        self.profiles.push(profile);
    }

    pub fn get(&self, name: &str) -> Option<&DefenderProfile> {
        self.by_name.get(name).map(|&idx| &self.profiles[idx])
    }

    /// Look up a profile, failing on unknown names
    pub fn require(&self, name: &str) -> Result<&DefenderProfile> {
        self.get(name)
            .ok_or_else(|| MathhammerError::UnknownDefender(name.to_string()))
    }

    pub fn all(&self) -> &[DefenderProfile] {
        &self.profiles
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(DefenderProfile::name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Parse a catalog from TOML text
pub fn parse_catalog_toml(content: &str) -> Result<DefenderCatalog> {
    let file: CatalogFile = toml::from_str(content)?;
    DefenderCatalog::from_profiles(file.defender)
}

/// Load a catalog from a TOML file of `[[defender]]` tables
pub fn load_catalog(path: &Path) -> Result<DefenderCatalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog_toml(&content)?;
    tracing::debug!(
        "Loaded {} defender profiles from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
