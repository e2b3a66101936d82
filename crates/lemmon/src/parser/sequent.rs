//! Sequent splitting

use crate::error::{LogicError, Result};
use crate::proof::ProofLine;

/// A split sequent: premises and a single conclusion
#[derive(Debug, Clone, PartialEq)]
pub struct Sequent {
    pub premises: Vec<ProofLine>,
    pub conclusion: ProofLine,
}

impl Sequent {
    /// All lines of the sequent in order, conclusion last, ready for
    /// truth-table analysis
    pub fn lines(&self) -> Vec<ProofLine> {
        let mut lines = self.premises.clone();
        lines.push(self.conclusion.clone());
        lines
    }
}

/// Split a one-line sequent `P1, P2, … ⊢ C` into premise lines and a
/// conclusion line. `∴` is accepted as a synonym for `⊢`. Formula text
/// is upper-cased so variable identity lines up across readers.
pub fn parse_sequent(text: &str) -> Result<Sequent> {
    let text = text.to_uppercase().replace('∴', "⊢");
    let parts: Vec<&str> = text.split('⊢').collect();
    let &[premise_part, conclusion_part] = parts.as_slice() else {
        return Err(LogicError::InvalidConclusion);
    };

    let mut premises = Vec::new();
    let premise_part = premise_part.trim();
    if !premise_part.is_empty() {
        for (i, formula) in premise_part.split(',').enumerate() {
            premises.push(ProofLine::premise(i + 1, formula)?);
        }
    }
    let conclusion = ProofLine::derived(premises.len() + 1, conclusion_part)?;

    Ok(Sequent {
        premises,
        conclusion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::LineRole;

    #[test]
    fn test_split_premises_and_conclusion() {
        let sequent = parse_sequent("P ∧ (Q ∨ R), P → ¬R ⊢ Q ∨ E").unwrap();
        assert_eq!(sequent.premises.len(), 2);
        assert_eq!(sequent.premises[0].formula, "P ∧ (Q ∨ R)");
        assert_eq!(sequent.premises[1].formula, "P → ¬R");
        assert_eq!(sequent.premises[1].line, 2);
        assert_eq!(sequent.conclusion.formula, "Q ∨ E");
        assert_eq!(sequent.conclusion.line, 3);
        assert_eq!(sequent.conclusion.role, LineRole::Derived);
    }

    #[test]
    fn test_therefore_synonym() {
        let sequent = parse_sequent("P ∴ P ∨ Q").unwrap();
        assert_eq!(sequent.premises.len(), 1);
        assert_eq!(sequent.conclusion.formula, "P ∨ Q");
    }

    #[test]
    fn test_missing_turnstile() {
        assert_eq!(
            parse_sequent("P ∧ (Q ∨ R), P → ¬R").unwrap_err(),
            LogicError::InvalidConclusion
        );
    }

    #[test]
    fn test_two_turnstiles() {
        assert_eq!(
            parse_sequent("P ⊢ Q ⊢ R").unwrap_err(),
            LogicError::InvalidConclusion
        );
    }

    #[test]
    fn test_no_premises() {
        let sequent = parse_sequent("⊢ P ∨ ¬P").unwrap();
        assert!(sequent.premises.is_empty());
        assert_eq!(sequent.conclusion.line, 1);
    }

    #[test]
    fn test_lowercase_input_is_normalised() {
        let sequent = parse_sequent("p and q ⊢ p").unwrap();
        assert_eq!(sequent.premises[0].formula, "P ∧ Q");
    }
}
