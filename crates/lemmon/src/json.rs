//! JSON report types for proof and analysis data

use crate::analysis::{LineAnalysis, TruthTableResult};
use crate::proof::{LineRole, ProofLine};
use serde::{Deserialize, Serialize};

/// JSON representation of a proof line with its rule check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofLineJson {
    pub line: usize,
    pub assumptions: Vec<usize>,
    pub formula: String,
    pub refs: Vec<usize>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_rule: Option<String>,
    pub rule_valid: bool,
}

impl ProofLineJson {
    /// Build the report record for one line of a deduction.
    pub fn from_line(line: &ProofLine, all: &[ProofLine]) -> Self {
        let role = match line.role {
            LineRole::Premise => "premise",
            LineRole::Assume => "assume",
            LineRole::Derived => "derived",
        };
        ProofLineJson {
            line: line.line,
            assumptions: line.assumptions.clone(),
            formula: line.formula.clone(),
            refs: line.cited_refs.clone(),
            role: role.to_string(),
            rule: line.user_rule.clone(),
            detected_rule: line.detected_rule.map(|rule| rule.code().to_string()),
            rule_valid: line.user_rule_is_valid(all),
        }
    }
}

/// JSON representation of one analysed formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineAnalysisJson {
    pub formula: String,
    pub values: Vec<bool>,
    pub classification: String,
}

impl From<&LineAnalysis> for LineAnalysisJson {
    fn from(analysis: &LineAnalysis) -> Self {
        LineAnalysisJson {
            formula: analysis.expression.clone(),
            values: analysis.results.clone(),
            classification: analysis.classification.to_string(),
        }
    }
}

/// JSON representation of a full truth-table analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisJson {
    pub variables: Vec<String>,
    /// One row per assignment, values aligned with `variables`
    pub rows: Vec<Vec<bool>>,
    pub lines: Vec<LineAnalysisJson>,
    pub subexpressions: Vec<LineAnalysisJson>,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counter_examples: Vec<Vec<bool>>,
}

impl From<&TruthTableResult> for AnalysisJson {
    fn from(result: &TruthTableResult) -> Self {
        let row = |assignment: &crate::logic::Assignment| -> Vec<bool> {
            result
                .variables
                .iter()
                .map(|name| assignment.value(name))
                .collect()
        };
        AnalysisJson {
            variables: result.variables.clone(),
            rows: result.combinations.iter().map(row).collect(),
            lines: result.lines.iter().map(Into::into).collect(),
            subexpressions: result.subexpressions.iter().map(Into::into).collect(),
            valid: result.valid,
            counter_examples: result.counter_examples.iter().map(row).collect(),
        }
    }
}
