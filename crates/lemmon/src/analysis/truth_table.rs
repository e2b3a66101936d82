//! Assignment enumeration, classification and validity checking

use crate::logic::{canonical, subexpr, Assignment, Expression};
use crate::proof::{LineRole, ProofLine};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a formula's full truth-vector reduces to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

impl Classification {
    pub fn from_results(results: &[bool]) -> Self {
        if results.iter().all(|&value| value) {
            Classification::Tautology
        } else if results.iter().all(|&value| !value) {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Tautology => "Tautology",
            Classification::Contradiction => "Contradiction",
            Classification::Contingent => "Contingent",
        };
        write!(f, "{}", label)
    }
}

/// Truth-vector of one formula over every assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAnalysis {
    /// Canonical rendering of the formula
    pub expression: String,
    /// One value per assignment, aligned with `combinations`
    pub results: Vec<bool>,
    pub classification: Classification,
}

impl LineAnalysis {
    fn over(expr: &Expression, combinations: &[Assignment]) -> Self {
        let results: Vec<bool> = combinations
            .iter()
            .map(|assignment| expr.evaluate(assignment))
            .collect();
        let classification = Classification::from_results(&results);
        LineAnalysis {
            expression: canonical(expr),
            results,
            classification,
        }
    }
}

/// The full truth table of an argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTableResult {
    /// Distinct atoms in first-seen order across the proof lines
    pub variables: Vec<String>,
    /// `2^n` assignments; the first variable is the most significant bit
    pub combinations: Vec<Assignment>,
    /// One record per proof line, in input order
    pub lines: Vec<LineAnalysis>,
    /// Compound sub-formulas across all lines, deduplicated, by depth
    pub subexpressions: Vec<LineAnalysis>,
    pub valid: bool,
    /// Assignments where every premise holds but the conclusion fails
    pub counter_examples: Vec<Assignment>,
}

/// Analyse an argument: enumerate assignments, evaluate every line and
/// compound sub-formula, classify, and decide semantic validity.
///
/// Premises are the lines with role `Premise`; the conclusion is the
/// last line of the input, whatever its role. With no premises the
/// argument is valid exactly when the conclusion is a tautology.
pub fn analyse(proofs: &[ProofLine]) -> TruthTableResult {
    let mut names: IndexSet<String> = IndexSet::new();
    for proof in proofs {
        proof.ast.collect_variables(&mut names);
    }
    let variables: Vec<String> = names.into_iter().collect();
    let combinations = enumerate(&variables);

    let lines: Vec<LineAnalysis> = proofs
        .iter()
        .map(|proof| LineAnalysis::over(&proof.ast, &combinations))
        .collect();

    let mut compounds: IndexSet<Expression> = IndexSet::new();
    for proof in proofs {
        subexpr::collect(&proof.ast, &mut compounds);
    }
    let mut compounds: Vec<Expression> = compounds.into_iter().collect();
    compounds.sort_by_key(Expression::depth);
    let subexpressions: Vec<LineAnalysis> = compounds
        .iter()
        .map(|expr| LineAnalysis::over(expr, &combinations))
        .collect();

    let premises: Vec<&ProofLine> = proofs
        .iter()
        .filter(|proof| proof.role == LineRole::Premise)
        .collect();
    let mut counter_examples = Vec::new();
    if let Some(conclusion) = proofs.last() {
        for assignment in &combinations {
            let premises_hold = premises
                .iter()
                .all(|premise| premise.ast.evaluate(assignment));
            if premises_hold && !conclusion.ast.evaluate(assignment) {
                counter_examples.push(assignment.clone());
            }
        }
    }
    let valid = counter_examples.is_empty();

    TruthTableResult {
        variables,
        combinations,
        lines,
        subexpressions,
        valid,
        counter_examples,
    }
}

/// All `2^n` assignments over `variables`, enumerated with the first
/// variable as the most significant bit: row 0 is all-false, the last
/// row all-true.
fn enumerate(variables: &[String]) -> Vec<Assignment> {
    let n = variables.len();
    let count = 1usize << n;
    let mut combinations = Vec::with_capacity(count);
    for i in 0..count {
        let mut assignment = Assignment::new();
        for (k, name) in variables.iter().enumerate() {
            assignment.set(name.clone(), (i >> (n - 1 - k)) & 1 != 0);
        }
        combinations.push(assignment);
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::ProofLine;

    #[test]
    fn test_enumeration_order_msb_first() {
        let variables = vec!["P".to_string(), "Q".to_string(), "R".to_string()];
        let combinations = enumerate(&variables);
        assert_eq!(combinations.len(), 8);

        let row = |i: usize| {
            let a: &Assignment = &combinations[i];
            (a.value("P"), a.value("Q"), a.value("R"))
        };
        assert_eq!(row(0), (false, false, false));
        assert_eq!(row(1), (false, false, true));
        assert_eq!(row(2), (false, true, false));
        assert_eq!(row(7), (true, true, true));
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            Classification::from_results(&[true, true]),
            Classification::Tautology
        );
        assert_eq!(
            Classification::from_results(&[false, false]),
            Classification::Contradiction
        );
        assert_eq!(
            Classification::from_results(&[true, false]),
            Classification::Contingent
        );
    }

    #[test]
    fn test_no_premises_valid_iff_tautology() {
        let tautology = ProofLine::derived(1, "P ∨ ¬P").unwrap();
        let result = analyse(&[tautology]);
        assert!(result.valid);
        assert_eq!(result.lines[0].classification, Classification::Tautology);

        let contingent = ProofLine::derived(1, "P").unwrap();
        let result = analyse(&[contingent]);
        assert!(!result.valid);
        assert_eq!(result.counter_examples.len(), 1);
        assert!(!result.counter_examples[0].value("P"));
    }

    #[test]
    fn test_subexpressions_sorted_by_depth() {
        // ¬(P∧Q) ∨ R: depths are (P∧Q)=1, ¬(P∧Q)=2, root=3
        let line = ProofLine::derived(1, "¬(P ∧ Q) ∨ R").unwrap();
        let result = analyse(&[line]);
        let rendered: Vec<&str> = result
            .subexpressions
            .iter()
            .map(|s| s.expression.as_str())
            .collect();
        assert_eq!(rendered, vec!["P ∧ Q", "¬(P ∧ Q)", "¬(P ∧ Q) ∨ R"]);
    }
}
