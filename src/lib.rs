//! Mathhammer - expected damage for tabletop wargame attacks
//!
//! Closed-form expectations for the hit → wound → save → damage sequence,
//! with the input validation a form or CLI needs in front of it.

pub mod calculator;
pub mod combat;
pub mod core;
pub mod dice;
pub mod profiles;
pub mod report;
pub mod validation;

pub use calculator::{Calculator, Evaluation};
pub use combat::CombatResult;
pub use profiles::{AttackProfile, DefenderCatalog, DefenderProfile};
pub use validation::RawAttackInput;
