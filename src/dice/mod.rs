//! Closed-form d6 probabilities and reroll expectations

pub mod probability;
pub mod reroll;

pub use probability::{probability_at_least, probability_less_than};
pub use reroll::{expected_successes, RerollPolicy};
