//! Proof lines of a deduction

use super::rules::RuleCode;
use crate::error::Result;
use crate::logic::{canonical, Expression};
use crate::parser::parse_formula;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a line entered the deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineRole {
    /// Premise of the argument
    Premise,
    /// Assumption opened for a subproof
    Assume,
    /// Derived from earlier lines
    #[default]
    Derived,
}

/// One step of a Lemmon-style deduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofLine {
    /// 1-based line number, unique across the deduction
    pub line: usize,
    /// Open assumptions this line depends on (the leading bracket)
    pub assumptions: Vec<usize>,
    /// Canonicalised formula string, post-parse
    pub formula: String,
    pub ast: Expression,
    /// Lines cited to justify this one (the trailing bracket);
    /// self-justifying lines cite themselves
    pub cited_refs: Vec<usize>,
    /// The rule name as the user wrote it
    pub user_rule: Option<String>,
    pub role: LineRole,
    /// First rule the detector recognised, if any
    pub detected_rule: Option<RuleCode>,
}

impl ProofLine {
    fn from_ast(line: usize, ast: Expression, role: LineRole) -> Self {
        let self_refs = match role {
            LineRole::Premise | LineRole::Assume => vec![line],
            LineRole::Derived => Vec::new(),
        };
        ProofLine {
            line,
            assumptions: self_refs.clone(),
            formula: canonical(&ast),
            ast,
            cited_refs: self_refs,
            user_rule: None,
            role,
            detected_rule: None,
        }
    }

    /// Parse a premise line (self-justifying)
    pub fn premise(line: usize, text: &str) -> Result<Self> {
        Ok(Self::from_ast(line, parse_formula(text)?, LineRole::Premise))
    }

    /// Parse an assumption line (self-justifying)
    pub fn assumption(line: usize, text: &str) -> Result<Self> {
        Ok(Self::from_ast(line, parse_formula(text)?, LineRole::Assume))
    }

    /// Parse a conclusion or derived line
    pub fn derived(line: usize, text: &str) -> Result<Self> {
        Ok(Self::from_ast(line, parse_formula(text)?, LineRole::Derived))
    }

    /// Premises and assumptions justify themselves; no rule applies
    pub fn is_self_justifying(&self) -> bool {
        matches!(self.role, LineRole::Premise | LineRole::Assume)
    }

    /// The user's cited rule, normalised to a short code
    pub fn user_rule_code(&self) -> Option<RuleCode> {
        self.user_rule.as_deref().and_then(RuleCode::normalise)
    }

    /// Whether the user's cited rule holds on this line.
    ///
    /// Self-justifying lines are always valid. Otherwise the
    /// normalised user rule must match the detected rule, or its own
    /// detector must succeed directly — rules that share a shape with
    /// a higher-priority rule (DS and MPT) stay citable.
    pub fn user_rule_is_valid(&self, all: &[ProofLine]) -> bool {
        if self.is_self_justifying() {
            return true;
        }
        let Some(code) = self.user_rule_code() else {
            return false;
        };
        if self.detected_rule == Some(code) {
            return true;
        }
        crate::detect::try_rule(code, self, all)
    }
}

impl fmt::Display for ProofLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assumptions: Vec<String> = self.assumptions.iter().map(|n| n.to_string()).collect();
        write!(
            f,
            "[{}] ({}) {}",
            assumptions.join(","),
            self.line,
            self.formula
        )?;
        match self.role {
            LineRole::Premise => write!(f, " [Premise]"),
            LineRole::Assume => write!(f, " [Assume]"),
            LineRole::Derived => {
                let refs: Vec<String> = self.cited_refs.iter().map(|n| n.to_string()).collect();
                let rule = self
                    .detected_rule
                    .map(|r| r.code().to_string())
                    .or_else(|| self.user_rule.clone())
                    .unwrap_or_default();
                write!(f, " [{} {}]", refs.join(","), rule)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premise_is_self_justifying() {
        let line = ProofLine::premise(3, "P ∧ Q").unwrap();
        assert_eq!(line.line, 3);
        assert_eq!(line.cited_refs, vec![3]);
        assert_eq!(line.assumptions, vec![3]);
        assert_eq!(line.role, LineRole::Premise);
        assert!(line.is_self_justifying());
        assert!(line.user_rule_is_valid(&[]));
    }

    #[test]
    fn test_derived_line_has_no_self_refs() {
        let line = ProofLine::derived(4, "P").unwrap();
        assert!(line.cited_refs.is_empty());
        assert_eq!(line.role, LineRole::Derived);
        assert!(!line.is_self_justifying());
    }

    #[test]
    fn test_formula_is_canonicalised() {
        let line = ProofLine::premise(1, "((P∧ (Q∨ R)))").unwrap();
        assert_eq!(line.formula, "P ∧ (Q ∨ R)");
    }
}
