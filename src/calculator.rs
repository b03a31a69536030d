//! Stateless calculator service
//!
//! Holds only an immutable defender catalog and presentation config. A
//! presentation layer owns every piece of mutable form state and calls in
//! once per render or submit.

use crate::combat::{self, CombatResult};
use crate::core::config::CalculatorConfig;
use crate::core::error::Result;
use crate::profiles::{load_catalog, DefenderCatalog};
use crate::report;
use crate::validation::{self, RawAttackInput, ValidationFailure};

/// Outcome of one evaluation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// One row per selected defender, in selection order
    Results(Vec<CombatResult>),
    /// Some required field or the target selection is missing
    Incomplete,
    /// The first invalid field's message
    Invalid(String),
}

impl From<ValidationFailure> for Evaluation {
    fn from(failure: ValidationFailure) -> Self {
        match failure {
            ValidationFailure::Incomplete => Evaluation::Incomplete,
            ValidationFailure::Invalid(err) => Evaluation::Invalid(err.message().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: DefenderCatalog,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DefenderCatalog::with_defaults(), CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(catalog: DefenderCatalog, config: CalculatorConfig) -> Self {
        Self { catalog, config }
    }

    /// Build from config, loading the catalog file when one is configured
    pub fn from_config(config: CalculatorConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => DefenderCatalog::with_defaults(),
        };
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &DefenderCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// First problem with the input, or `None` if it can be evaluated
    pub fn validate(&self, input: &RawAttackInput) -> Option<ValidationFailure> {
        validation::validate(input)
    }

    /// Validate and evaluate against every selected defender
    ///
    /// Incomplete and invalid input come back as data. Only a selected
    /// defender missing from the catalog is an error.
    pub fn evaluate(&self, input: &RawAttackInput) -> Result<Evaluation> {
        let validated = match validation::parse(input) {
            Ok(validated) => validated,
            Err(failure) => {
                tracing::debug!("Evaluation skipped: {}", failure);
                return Ok(failure.into());
            }
        };

        let results = combat::evaluate(
            &validated.profile,
            validated.enemies.as_slice(),
            &self.catalog,
        )?;
        Ok(Evaluation::Results(results))
    }

    /// Render an evaluation as text at the configured precision
    pub fn render(&self, evaluation: &Evaluation) -> String {
        report::render(evaluation, self.config.display_precision)
    }
}
