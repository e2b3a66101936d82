//! Replacement-rule detectors
//!
//! Each rule recognises a logical equivalence between the current line
//! and its single cited line, in both rewrite directions.

use super::single_ref;
use crate::logic::{compare, equivalent, Expression};
use crate::proof::ProofLine;
use std::cmp::Ordering;

/// Distribution: `(A∨B)∧(A∨C) ⇔ A∨(B∧C)` and `A∧(B∨C) ⇔ (A∧B)∨(A∧C)`.
/// The shared factor may sit on either side of each disjunct/conjunct.
pub(super) fn distribution(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    dist_matches(&line.ast, &reference.ast) || dist_matches(&reference.ast, &line.ast)
}

/// `factored` is the `A op (B op' C)` side, `expanded` the distributed
/// side. Commutative comparator equality absorbs factor position.
fn dist_matches(factored: &Expression, expanded: &Expression) -> bool {
    use Expression::*;
    match factored {
        Or(left, right) => {
            for (a, bc) in [(left, right), (right, left)] {
                if let And(b, c) = bc.as_ref() {
                    let expansion = Expression::and(
                        Expression::or((**a).clone(), (**b).clone()),
                        Expression::or((**a).clone(), (**c).clone()),
                    );
                    if equivalent(expanded, &expansion) {
                        return true;
                    }
                }
            }
            false
        }
        And(left, right) => {
            for (a, bc) in [(left, right), (right, left)] {
                if let Or(b, c) = bc.as_ref() {
                    let expansion = Expression::or(
                        Expression::and((**a).clone(), (**b).clone()),
                        Expression::and((**a).clone(), (**c).clone()),
                    );
                    if equivalent(expanded, &expansion) {
                        return true;
                    }
                }
            }
            false
        }
        _ => false,
    }
}

/// Commutation: swapped children under ∧ or ∨.
pub(super) fn commutation(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    let swapped = match &reference.ast {
        Expression::And(l, r) => Expression::and((**r).clone(), (**l).clone()),
        Expression::Or(l, r) => Expression::or((**r).clone(), (**l).clone()),
        _ => return false,
    };
    same_connective(&line.ast, &reference.ast) && equivalent(&line.ast, &swapped)
}

fn same_connective(a: &Expression, b: &Expression) -> bool {
    matches!(
        (a, b),
        (Expression::And(..), Expression::And(..)) | (Expression::Or(..), Expression::Or(..))
    )
}

/// Association: both sides flatten, over the shared top connective, to
/// the same multiset of leaves.
pub(super) fn association(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    let conjunctive = match (&line.ast, &reference.ast) {
        (Expression::And(..), Expression::And(..)) => true,
        (Expression::Or(..), Expression::Or(..)) => false,
        _ => return false,
    };

    let mut current_leaves = Vec::new();
    let mut reference_leaves = Vec::new();
    flatten(&line.ast, conjunctive, &mut current_leaves);
    flatten(&reference.ast, conjunctive, &mut reference_leaves);
    if current_leaves.len() != reference_leaves.len() {
        return false;
    }

    current_leaves.sort_by(|a, b| compare(a, b));
    reference_leaves.sort_by(|a, b| compare(a, b));
    current_leaves
        .iter()
        .zip(&reference_leaves)
        .all(|(a, b)| compare(a, b) == Ordering::Equal)
}

fn flatten<'a>(expr: &'a Expression, conjunctive: bool, out: &mut Vec<&'a Expression>) {
    match expr {
        Expression::And(l, r) if conjunctive => {
            flatten(l, conjunctive, out);
            flatten(r, conjunctive, out);
        }
        Expression::Or(l, r) if !conjunctive => {
            flatten(l, conjunctive, out);
            flatten(r, conjunctive, out);
        }
        _ => out.push(expr),
    }
}

/// Exportation: `(A∧B)→C ⇔ A→(B→C)`.
pub(super) fn exportation(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    exp_matches(&line.ast, &reference.ast) || exp_matches(&reference.ast, &line.ast)
}

/// Rebuild the conjunctive form from the curried side; ∧ commutativity
/// comes from the comparator.
fn exp_matches(conjunctive: &Expression, curried: &Expression) -> bool {
    use Expression::*;
    if let Implies(a, rest) = curried {
        if let Implies(b, c) = rest.as_ref() {
            let rebuilt = Expression::implies(
                Expression::and((**a).clone(), (**b).clone()),
                (**c).clone(),
            );
            return equivalent(conjunctive, &rebuilt);
        }
    }
    false
}

/// Double negation: `¬¬A ⇔ A`.
pub(super) fn double_negation(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    dn_matches(&line.ast, &reference.ast) || dn_matches(&reference.ast, &line.ast)
}

fn dn_matches(doubled: &Expression, plain: &Expression) -> bool {
    if let Expression::Not(inner) = doubled {
        if let Expression::Not(core) = inner.as_ref() {
            return equivalent(core, plain);
        }
    }
    false
}

/// De Morgan, both duals: `¬(A∨B) ⇔ ¬A∧¬B` and `¬(A∧B) ⇔ ¬A∨¬B`.
pub(super) fn de_morgan(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    dem_matches(&line.ast, &reference.ast) || dem_matches(&reference.ast, &line.ast)
}

fn dem_matches(negated: &Expression, split: &Expression) -> bool {
    use Expression::*;
    let Not(inner) = negated else {
        return false;
    };
    match inner.as_ref() {
        Or(a, b) => {
            let rebuilt = Expression::and(
                Expression::not((**a).clone()),
                Expression::not((**b).clone()),
            );
            equivalent(split, &rebuilt)
        }
        And(a, b) => {
            let rebuilt = Expression::or(
                Expression::not((**a).clone()),
                Expression::not((**b).clone()),
            );
            equivalent(split, &rebuilt)
        }
        _ => false,
    }
}

/// Contraposition: `A→B ⇔ ¬B→¬A`.
pub(super) fn contraposition(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    contra_matches(&line.ast, &reference.ast) || contra_matches(&reference.ast, &line.ast)
}

fn contra_matches(original: &Expression, transposed: &Expression) -> bool {
    if let Expression::Implies(a, b) = original {
        let rebuilt = Expression::implies(
            Expression::not((**b).clone()),
            Expression::not((**a).clone()),
        );
        return equivalent(transposed, &rebuilt);
    }
    false
}

/// Material implication: `A→B ⇔ ¬A∨B`.
pub(super) fn material_implication(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    impl_matches(&line.ast, &reference.ast) || impl_matches(&reference.ast, &line.ast)
}

fn impl_matches(conditional: &Expression, disjunctive: &Expression) -> bool {
    if let Expression::Implies(a, b) = conditional {
        let rebuilt = Expression::or(Expression::not((**a).clone()), (**b).clone());
        return equivalent(disjunctive, &rebuilt);
    }
    false
}

/// Biconditional exchange: `A↔B ⇔ (A→B)∧(B→A)`.
pub(super) fn biconditional_exchange(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    be_matches(&line.ast, &reference.ast) || be_matches(&reference.ast, &line.ast)
}

fn be_matches(biconditional: &Expression, pair: &Expression) -> bool {
    if let Expression::Iff(a, b) = biconditional {
        let rebuilt = Expression::and(
            Expression::implies((**a).clone(), (**b).clone()),
            Expression::implies((**b).clone(), (**a).clone()),
        );
        return equivalent(pair, &rebuilt);
    }
    false
}

/// Tautology: `A∧A ⇔ A` and `A∨A ⇔ A`.
pub(super) fn tautology(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    taut_matches(&line.ast, &reference.ast) || taut_matches(&reference.ast, &line.ast)
}

fn taut_matches(doubled: &Expression, single: &Expression) -> bool {
    match doubled {
        Expression::And(a, b) | Expression::Or(a, b) => {
            equivalent(a, b) && equivalent(single, a)
        }
        _ => false,
    }
}
