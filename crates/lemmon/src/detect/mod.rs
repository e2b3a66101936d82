//! Rule detection over proof lines
//!
//! The dispatcher walks a fixed, ordered table of detectors and
//! records the first that recognises the line. Every detector resolves
//! the line's citations by number (a missing reference fails the
//! detector), enforces its citation arity, and reduces to a
//! structural-equality check between the current AST and a tree built
//! fresh from the referenced lines.

mod inference;
mod replacement;
mod subproof;

use crate::proof::{LineRole, ProofLine, RuleCode};

type Detector = fn(&ProofLine, &[ProofLine]) -> bool;

/// Detection priority: replacement rules first, then inference rules.
const DETECTORS: &[(RuleCode, Detector)] = &[
    (RuleCode::Dist, replacement::distribution),
    (RuleCode::Comm, replacement::commutation),
    (RuleCode::Assoc, replacement::association),
    (RuleCode::Exp, replacement::exportation),
    (RuleCode::Dn, replacement::double_negation),
    (RuleCode::DeM, replacement::de_morgan),
    (RuleCode::Contra, replacement::contraposition),
    (RuleCode::Simp, replacement::material_implication),
    (RuleCode::Be, replacement::biconditional_exchange),
    (RuleCode::Taut, replacement::tautology),
    (RuleCode::Cpa, subproof::conditional_proof),
    (RuleCode::Raa, subproof::reductio),
    (RuleCode::NegIntro, subproof::negation_intro),
    (RuleCode::Mp, inference::modus_ponens),
    (RuleCode::Mt, inference::modus_tollens),
    (RuleCode::Mpt, inference::modus_ponendo_tollens),
    (RuleCode::Hs, inference::hypothetical_syllogism),
    (RuleCode::Ds, inference::disjunctive_syllogism),
    (RuleCode::Cd, inference::constructive_dilemma),
    (RuleCode::Dd, inference::destructive_dilemma),
    (RuleCode::AndIntro, inference::conjunction_intro),
    (RuleCode::AndElim, inference::conjunction_elim),
    (RuleCode::OrIntro, inference::disjunction_intro),
    (RuleCode::OrElim, subproof::disjunction_elim),
    (RuleCode::Abs, inference::absorption),
];

/// Find the first rule whose detector recognises this line.
///
/// Self-justifying lines (premises and assumptions) are never matched.
pub fn detect_rule(line: &ProofLine, all: &[ProofLine]) -> Option<RuleCode> {
    if line.is_self_justifying() {
        return None;
    }
    DETECTORS
        .iter()
        .find(|(_, detector)| detector(line, all))
        .map(|(code, _)| *code)
}

/// Run a single rule's detector directly.
pub fn try_rule(code: RuleCode, line: &ProofLine, all: &[ProofLine]) -> bool {
    if line.is_self_justifying() {
        return false;
    }
    DETECTORS
        .iter()
        .find(|(c, _)| *c == code)
        .is_some_and(|(_, detector)| detector(line, all))
}

/// Resolve a line number to the line carrying it.
fn lookup<'a>(all: &'a [ProofLine], number: usize) -> Option<&'a ProofLine> {
    all.iter().find(|line| line.line == number)
}

/// Resolve every citation of a line; `None` if any is missing.
fn cited_lines<'a>(line: &ProofLine, all: &'a [ProofLine]) -> Option<Vec<&'a ProofLine>> {
    line.cited_refs
        .iter()
        .map(|&number| lookup(all, number))
        .collect()
}

/// The single citation of a replacement-rule line.
fn single_ref<'a>(line: &ProofLine, all: &'a [ProofLine]) -> Option<&'a ProofLine> {
    match cited_lines(line, all)?.as_slice() {
        &[reference] => Some(reference),
        _ => None,
    }
}

/// The two citations of a binary inference line.
fn two_refs<'a>(line: &ProofLine, all: &'a [ProofLine]) -> Option<(&'a ProofLine, &'a ProofLine)> {
    match cited_lines(line, all)?.as_slice() {
        &[first, second] => Some((first, second)),
        _ => None,
    }
}

/// Whether a reference line is an open assumption.
fn is_assumption(line: &ProofLine) -> bool {
    line.role == LineRole::Assume
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::ProofLine;

    #[test]
    fn test_missing_reference_fails_detection() {
        let mut line = ProofLine::derived(2, "Q").unwrap();
        line.cited_refs = vec![7];
        let all = vec![line.clone()];
        assert_eq!(detect_rule(&line, &all), None);
    }

    #[test]
    fn test_self_justifying_lines_are_skipped() {
        // commutation would trivially match a self-citing ∧ line
        let premise = ProofLine::premise(1, "P ∧ Q").unwrap();
        let all = vec![premise.clone()];
        assert_eq!(detect_rule(&premise, &all), None);
    }
}
