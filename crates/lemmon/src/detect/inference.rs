//! Inference-rule detectors without subproof structure

use super::{cited_lines, single_ref, two_refs};
use crate::logic::{equivalent, Expression};
use crate::proof::ProofLine;

/// Modus ponens: from `A→B` and `A`, conclude `B`.
pub(super) fn modus_ponens(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    mp_matches(&line.ast, &first.ast, &second.ast) || mp_matches(&line.ast, &second.ast, &first.ast)
}

fn mp_matches(current: &Expression, conditional: &Expression, antecedent: &Expression) -> bool {
    if let Expression::Implies(a, b) = conditional {
        equivalent(antecedent, a) && equivalent(current, b)
    } else {
        false
    }
}

/// Modus tollens: from `A→B` and `¬B`, conclude `¬A`.
pub(super) fn modus_tollens(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    mt_matches(&line.ast, &first.ast, &second.ast) || mt_matches(&line.ast, &second.ast, &first.ast)
}

fn mt_matches(current: &Expression, conditional: &Expression, negation: &Expression) -> bool {
    if let Expression::Implies(a, b) = conditional {
        equivalent(negation, &Expression::not((**b).clone()))
            && equivalent(current, &Expression::not((**a).clone()))
    } else {
        false
    }
}

/// Modus ponendo tollens / disjunctive syllogism: from `A∨B` and the
/// negation of one disjunct, conclude the other.
fn disjunct_elimination(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    mpt_matches(&line.ast, &first.ast, &second.ast)
        || mpt_matches(&line.ast, &second.ast, &first.ast)
}

fn mpt_matches(current: &Expression, disjunction: &Expression, negation: &Expression) -> bool {
    let (Expression::Or(a, b), Expression::Not(x)) = (disjunction, negation) else {
        return false;
    };
    (equivalent(x, a) && equivalent(current, b)) || (equivalent(x, b) && equivalent(current, a))
}

pub(super) fn modus_ponendo_tollens(line: &ProofLine, all: &[ProofLine]) -> bool {
    disjunct_elimination(line, all)
}

/// Same shape as MPT; kept as its own detector so the rule stays
/// citable under its own name.
pub(super) fn disjunctive_syllogism(line: &ProofLine, all: &[ProofLine]) -> bool {
    disjunct_elimination(line, all)
}

/// Hypothetical syllogism: from `A→B` and `B→C`, conclude `A→C`.
pub(super) fn hypothetical_syllogism(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    hs_matches(&line.ast, &first.ast, &second.ast) || hs_matches(&line.ast, &second.ast, &first.ast)
}

fn hs_matches(current: &Expression, first: &Expression, second: &Expression) -> bool {
    if let (Expression::Implies(a, b), Expression::Implies(b2, c)) = (first, second) {
        equivalent(b, b2)
            && equivalent(
                current,
                &Expression::implies((**a).clone(), (**c).clone()),
            )
    } else {
        false
    }
}

/// Constructive dilemma: from `A→C`, `B→D` and `A∨B`, conclude `C∨D`.
pub(super) fn constructive_dilemma(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(refs) = cited_lines(line, all) else {
        return false;
    };
    if refs.len() != 3 {
        return false;
    }
    (0..3).any(|i| {
        let others: Vec<usize> = (0..3).filter(|&j| j != i).collect();
        cd_matches(
            &line.ast,
            &refs[i].ast,
            &refs[others[0]].ast,
            &refs[others[1]].ast,
        )
    })
}

fn cd_matches(
    current: &Expression,
    disjunction: &Expression,
    first: &Expression,
    second: &Expression,
) -> bool {
    if let (Expression::Implies(a, c), Expression::Implies(b, d)) = (first, second) {
        equivalent(
            disjunction,
            &Expression::or((**a).clone(), (**b).clone()),
        ) && equivalent(current, &Expression::or((**c).clone(), (**d).clone()))
    } else {
        false
    }
}

/// Destructive dilemma: from `(A→C)∧(B→D)` and `¬C∨¬D`, conclude
/// `¬A∨¬B`.
pub(super) fn destructive_dilemma(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    dd_matches(&line.ast, &first.ast, &second.ast) || dd_matches(&line.ast, &second.ast, &first.ast)
}

fn dd_matches(current: &Expression, conjunction: &Expression, negations: &Expression) -> bool {
    let Expression::And(left, right) = conjunction else {
        return false;
    };
    let (Expression::Implies(a, c), Expression::Implies(b, d)) = (left.as_ref(), right.as_ref())
    else {
        return false;
    };
    let negated_consequents = Expression::or(
        Expression::not((**c).clone()),
        Expression::not((**d).clone()),
    );
    let negated_antecedents = Expression::or(
        Expression::not((**a).clone()),
        Expression::not((**b).clone()),
    );
    equivalent(negations, &negated_consequents) && equivalent(current, &negated_antecedents)
}

/// Conjunction introduction: from `X` and `Y`, conclude `X∧Y`.
pub(super) fn conjunction_intro(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some((first, second)) = two_refs(line, all) else {
        return false;
    };
    matches!(line.ast, Expression::And(..))
        && equivalent(
            &line.ast,
            &Expression::and(first.ast.clone(), second.ast.clone()),
        )
}

/// Conjunction elimination: from `X∧Y`, conclude `X` or `Y`.
pub(super) fn conjunction_elim(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    if let Expression::And(x, y) = &reference.ast {
        equivalent(&line.ast, x) || equivalent(&line.ast, y)
    } else {
        false
    }
}

/// Disjunction introduction: from `X`, conclude `X∨Y` for any `Y`.
pub(super) fn disjunction_intro(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    if let Expression::Or(x, y) = &line.ast {
        equivalent(&reference.ast, x) || equivalent(&reference.ast, y)
    } else {
        false
    }
}

/// Absorption: from `A→B`, conclude `A→(A∧B)`.
pub(super) fn absorption(line: &ProofLine, all: &[ProofLine]) -> bool {
    let Some(reference) = single_ref(line, all) else {
        return false;
    };
    if let Expression::Implies(a, b) = &reference.ast {
        let absorbed = Expression::implies(
            (**a).clone(),
            Expression::and((**a).clone(), (**b).clone()),
        );
        equivalent(&line.ast, &absorbed)
    } else {
        false
    }
}
