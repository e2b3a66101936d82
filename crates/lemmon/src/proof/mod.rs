//! Proof lines and the rule catalogue

pub mod line;
pub mod rules;

pub use line::{LineRole, ProofLine};
pub use rules::RuleCode;
