//! Calculator configuration with documented defaults

use std::path::PathBuf;

/// Configuration for the calculator service
///
/// None of these values affect the arithmetic; they only control how
/// results are presented and where the defender table comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Decimal places used when rendering wounds and models lost
    ///
    /// Internal computation always keeps full floating precision.
    /// At 2, 2.7777 renders as "2.78".
    pub display_precision: usize,

    /// Optional TOML file holding the defender catalog
    ///
    /// When unset, the built-in six-profile catalog is used.
    pub catalog_path: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display_precision: 2,
            catalog_path: None,
        }
    }
}

impl CalculatorConfig {
    /// Builder-style override for the catalog file
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Builder-style override for display precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.display_precision = precision;
        self
    }
}
