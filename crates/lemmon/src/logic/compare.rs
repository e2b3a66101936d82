//! Structural comparison of formulas

use super::expr::Expression;
use std::cmp::Ordering;

/// Structural equality modulo commutativity.
///
/// ∧, ∨ and ↔ compare their children as unordered pairs; → and ⊕
/// compare them in order. No normalisation is performed.
pub fn equivalent(a: &Expression, b: &Expression) -> bool {
    use Expression::*;
    match (a, b) {
        (Var(x), Var(y)) => x == y,
        (Not(x), Not(y)) => equivalent(x, y),
        (And(al, ar), And(bl, br)) | (Or(al, ar), Or(bl, br)) | (Iff(al, ar), Iff(bl, br)) => {
            (equivalent(al, bl) && equivalent(ar, br))
                || (equivalent(al, br) && equivalent(ar, bl))
        }
        (Implies(al, ar), Implies(bl, br)) | (Xor(al, ar), Xor(bl, br)) => {
            equivalent(al, bl) && equivalent(ar, br)
        }
        _ => false,
    }
}

/// Total order over formulas: variant rank first, then variable name,
/// then children left to right.
pub fn compare(a: &Expression, b: &Expression) -> Ordering {
    use Expression::*;
    rank(a).cmp(&rank(b)).then_with(|| match (a, b) {
        (Var(x), Var(y)) => x.cmp(y),
        (Not(x), Not(y)) => compare(x, y),
        (And(al, ar), And(bl, br))
        | (Or(al, ar), Or(bl, br))
        | (Xor(al, ar), Xor(bl, br))
        | (Implies(al, ar), Implies(bl, br))
        | (Iff(al, ar), Iff(bl, br)) => compare(al, bl).then_with(|| compare(ar, br)),
        _ => Ordering::Equal,
    })
}

fn rank(expr: &Expression) -> u8 {
    match expr {
        Expression::Var(_) => 0,
        Expression::Not(_) => 1,
        Expression::And(..) => 2,
        Expression::Or(..) => 3,
        Expression::Xor(..) => 4,
        Expression::Implies(..) => 5,
        Expression::Iff(..) => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Expression {
        Expression::var(name)
    }

    #[test]
    fn test_commutative_connectives() {
        let pq = Expression::and(var("P"), var("Q"));
        let qp = Expression::and(var("Q"), var("P"));
        assert!(equivalent(&pq, &qp));

        let pq = Expression::or(var("P"), var("Q"));
        let qp = Expression::or(var("Q"), var("P"));
        assert!(equivalent(&pq, &qp));

        let pq = Expression::iff(var("P"), var("Q"));
        let qp = Expression::iff(var("Q"), var("P"));
        assert!(equivalent(&pq, &qp));
    }

    #[test]
    fn test_ordered_connectives() {
        let pq = Expression::implies(var("P"), var("Q"));
        let qp = Expression::implies(var("Q"), var("P"));
        assert!(!equivalent(&pq, &qp));
        assert!(equivalent(&pq, &pq.clone()));

        let pq = Expression::xor(var("P"), var("Q"));
        let qp = Expression::xor(var("Q"), var("P"));
        assert!(!equivalent(&pq, &qp));
    }

    #[test]
    fn test_commutativity_recurses() {
        // (Q∧P)→R matches (P∧Q)→R through the ordered implication
        let a = Expression::implies(Expression::and(var("Q"), var("P")), var("R"));
        let b = Expression::implies(Expression::and(var("P"), var("Q")), var("R"));
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_distinct_variants_never_equal() {
        assert!(!equivalent(&var("P"), &Expression::not(var("P"))));
        assert!(!equivalent(
            &Expression::and(var("P"), var("Q")),
            &Expression::or(var("P"), var("Q")),
        ));
    }

    #[test]
    fn test_total_order() {
        assert_eq!(compare(&var("P"), &var("P")), Ordering::Equal);
        assert_eq!(compare(&var("P"), &var("Q")), Ordering::Less);
        assert_eq!(compare(&var("Z"), &Expression::not(var("A"))), Ordering::Less);
        assert_eq!(
            compare(
                &Expression::and(var("P"), var("Q")),
                &Expression::and(var("P"), var("R")),
            ),
            Ordering::Less
        );
    }
}
