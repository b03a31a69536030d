pub mod attack;
pub mod catalog;
pub mod defender;

pub use attack::AttackProfile;
pub use catalog::{load_catalog, DefenderCatalog};
pub use defender::DefenderProfile;
