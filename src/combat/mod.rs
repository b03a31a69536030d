pub mod batch;
pub mod damage;
pub mod result;
pub mod wound_table;

pub use batch::evaluate;
pub use damage::{compute_breakdown, compute_outcome, CombatBreakdown};
pub use result::CombatResult;
pub use wound_table::required_wound_roll;
