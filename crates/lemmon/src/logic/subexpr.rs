//! Compound sub-formula collection

use super::expr::Expression;
use indexmap::IndexSet;

/// Collect every compound sub-formula in post-order, keeping the first
/// occurrence of structurally identical duplicates. Atoms are skipped.
pub fn subexpressions(expr: &Expression) -> Vec<Expression> {
    let mut seen = IndexSet::new();
    collect(expr, &mut seen);
    seen.into_iter().collect()
}

/// Collect into an existing set, preserving first-encountered order
/// across several formulas.
pub fn collect(expr: &Expression, seen: &mut IndexSet<Expression>) {
    match expr {
        Expression::Var(_) => {}
        Expression::Not(inner) => {
            collect(inner, seen);
            seen.insert(expr.clone());
        }
        Expression::And(l, r)
        | Expression::Or(l, r)
        | Expression::Xor(l, r)
        | Expression::Implies(l, r)
        | Expression::Iff(l, r) => {
            collect(l, seen);
            collect(r, seen);
            seen.insert(expr.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_order_without_atoms() {
        // (P∧Q)∨¬R
        let conj = Expression::and(Expression::var("P"), Expression::var("Q"));
        let neg = Expression::not(Expression::var("R"));
        let root = Expression::or(conj.clone(), neg.clone());

        let subs = subexpressions(&root);
        assert_eq!(subs, vec![conj, neg, root]);
    }

    #[test]
    fn test_duplicates_dropped_by_identity() {
        // (P∧Q)∨(P∧Q): the conjunction appears once
        let conj = Expression::and(Expression::var("P"), Expression::var("Q"));
        let root = Expression::or(conj.clone(), conj.clone());

        let subs = subexpressions(&root);
        assert_eq!(subs, vec![conj, root]);
    }

    #[test]
    fn test_swapped_children_are_distinct() {
        // structural identity is exact: P∧Q and Q∧P both collected
        let pq = Expression::and(Expression::var("P"), Expression::var("Q"));
        let qp = Expression::and(Expression::var("Q"), Expression::var("P"));
        let root = Expression::or(pq.clone(), qp.clone());

        let subs = subexpressions(&root);
        assert_eq!(subs.len(), 3);
    }
}
