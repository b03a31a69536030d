pub mod config;
pub mod error;
pub mod types;

pub use config::CalculatorConfig;
pub use error::{MathhammerError, Result};
pub use types::{DieFace, NO_SAVE};
