//! Lemmon: analysis of arguments and natural-deduction proofs in
//! classical propositional logic.
//!
//! Given a formula, a sequent, or a line-by-line Lemmon-style
//! deduction, this library parses the formulas, generates truth
//! tables, classifies every formula and compound sub-formula,
//! decides semantic validity with counter-examples, and checks each
//! deduction line against a catalogue of replacement and inference
//! rules.

pub mod analysis;
pub mod detect;
pub mod error;
pub mod json;
pub mod logic;
pub mod parser;
pub mod proof;

// Re-export the analysis surface
pub use analysis::{analyse, Classification, LineAnalysis, TruthTableResult};

// Re-export formula types and operations
pub use logic::{canonical, equivalent, format_spacing, subexpressions, Assignment, Expression};

// Re-export parsing entry points
pub use parser::{parse_formula, parse_lemmon, parse_sequent, Sequent};

// Re-export proof types and rule detection
pub use detect::{detect_rule, try_rule};
pub use proof::{LineRole, ProofLine, RuleCode};

pub use error::{LogicError, Result};
