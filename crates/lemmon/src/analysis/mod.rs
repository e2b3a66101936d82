//! Truth-table analysis of arguments

mod truth_table;

pub use truth_table::{analyse, Classification, LineAnalysis, TruthTableResult};
