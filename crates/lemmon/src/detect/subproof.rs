//! Detectors for subproof-discharging rules
//!
//! These inspect the roles of the cited lines as well as their shapes:
//! ∨E and RAA and CPA require their assumption references to actually
//! be `Assume` lines. Whether the discharged assumption numbers leave
//! the current line's assumption set is the line parser's concern, not
//! checked here.

use super::{cited_lines, is_assumption, two_refs};
use crate::logic::{equivalent, Expression};
use crate::proof::ProofLine;

/// Conditional proof: current is `A→B`, with a cited assumption `A`
/// and a distinct cited line `B`.
pub(super) fn conditional_proof(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(refs) = cited_lines(line, all) else {
        return false;
    };
    let Expression::Implies(a, b) = &line.ast else {
        return false;
    };
    refs.iter().any(|assumption| {
        is_assumption(assumption)
            && equivalent(&assumption.ast, a)
            && refs
                .iter()
                .any(|other| other.line != assumption.line && equivalent(&other.ast, b))
    })
}

/// Reductio ad absurdum: current is `¬A`; one citation is the
/// assumption `A`, the other derives a contradiction `X∧¬X`.
pub(super) fn reductio(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    let Expression::Not(a) = &line.ast else {
        return false;
    };
    raa_matches(a, first, second) || raa_matches(a, second, first)
}

fn raa_matches(assumed: &Expression, assumption: &ProofLine, contradiction: &ProofLine) -> bool {
    if !is_assumption(assumption) || !equivalent(&assumption.ast, assumed) {
        return false;
    }
    is_contradiction_pair(&contradiction.ast)
}

/// `X∧¬X`, either order.
fn is_contradiction_pair(expr: &Expression) -> bool {
    let Expression::And(x, y) = expr else {
        return false;
    };
    equivalent(y, &Expression::not((**x).clone())) || equivalent(x, &Expression::not((**y).clone()))
}

/// Negation introduction: the citations yield implications `A→X` and
/// `A→¬X` with a shared antecedent; current is `¬A`. A citation whose
/// formula is a top-level conjunction contributes both conjuncts.
pub(super) fn negation_intro(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(refs) = cited_lines(line, all) else {
        return false;
    };

    let mut implications: Vec<&Expression> = Vec::new();
    for reference in &refs {
        match &reference.ast {
            expr @ Expression::Implies(..) => implications.push(expr),
            Expression::And(left, right) => {
                for side in [left.as_ref(), right.as_ref()] {
                    if matches!(side, Expression::Implies(..)) {
                        implications.push(side);
                    }
                }
            }
            _ => {}
        }
    }

    for (i, first) in implications.iter().enumerate() {
        for second in &implications[i + 1..] {
            let (Expression::Implies(a1, c1), Expression::Implies(a2, c2)) = (*first, *second)
            else {
                continue;
            };
            if !equivalent(a1, a2) {
                continue;
            }
            let contradictory = equivalent(c2, &Expression::not((**c1).clone()))
                || equivalent(c1, &Expression::not((**c2).clone()));
            if contradictory && equivalent(&line.ast, &Expression::not((**a1).clone())) {
                return true;
            }
        }
    }
    false
}

/// Disjunction elimination. Citations in order:
/// `[disjunction, assume A, conclusion from A, assume B, conclusion from B]`.
/// Both assumption lines must be `Assume`, must match the two disjuncts
/// (in either pairing), and both conclusions must equal the current line.
pub(super) fn disjunction_elim(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(refs) = cited_lines(line, all) else {
        return false;
    };
    let &[disjunction, assume_a, concl_a, assume_b, concl_b] = refs.as_slice() else {
        return false;
    };
    let Expression::Or(a, b) = &disjunction.ast else {
        return false;
    };
    if !is_assumption(assume_a) || !is_assumption(assume_b) {
        return false;
    }
    let assumptions_cover_disjuncts = (equivalent(&assume_a.ast, a)
        && equivalent(&assume_b.ast, b))
        || (equivalent(&assume_a.ast, b) && equivalent(&assume_b.ast, a));
    assumptions_cover_disjuncts
        && equivalent(&concl_a.ast, &line.ast)
        && equivalent(&concl_b.ast, &line.ast)
}
