//! Propositional formulas

use super::assignment::Assignment;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A propositional formula
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// Atomic proposition
    Var(String),
    /// Negation
    Not(Box<Expression>),
    /// Conjunction
    And(Box<Expression>, Box<Expression>),
    /// Disjunction
    Or(Box<Expression>, Box<Expression>),
    /// Exclusive disjunction
    Xor(Box<Expression>, Box<Expression>),
    /// Implication
    Implies(Box<Expression>, Box<Expression>),
    /// Biconditional
    Iff(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Var(name.into())
    }

    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn xor(left: Expression, right: Expression) -> Self {
        Expression::Xor(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Expression, right: Expression) -> Self {
        Expression::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Expression, right: Expression) -> Self {
        Expression::Iff(Box::new(left), Box::new(right))
    }

    /// Get all variable names in this formula, in first-seen order
    pub fn variables(&self) -> Vec<String> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars.into_iter().collect()
    }

    /// Collect all variable names in this formula, preserving first-seen order
    pub fn collect_variables(&self, vars: &mut IndexSet<String>) {
        match self {
            Expression::Var(name) => {
                vars.insert(name.clone());
            }
            Expression::Not(inner) => inner.collect_variables(vars),
            Expression::And(l, r)
            | Expression::Or(l, r)
            | Expression::Xor(l, r)
            | Expression::Implies(l, r)
            | Expression::Iff(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Tree depth: atoms are 0, every operator adds one level
    pub fn depth(&self) -> usize {
        match self {
            Expression::Var(_) => 0,
            Expression::Not(inner) => 1 + inner.depth(),
            Expression::And(l, r)
            | Expression::Or(l, r)
            | Expression::Xor(l, r)
            | Expression::Implies(l, r)
            | Expression::Iff(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Whether this node is an operator application rather than an atom
    pub fn is_compound(&self) -> bool {
        !matches!(self, Expression::Var(_))
    }

    /// Evaluate under an assignment.
    ///
    /// Variables absent from the assignment read as `false`.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        match self {
            Expression::Var(name) => assignment.value(name),
            Expression::Not(inner) => !inner.evaluate(assignment),
            Expression::And(l, r) => l.evaluate(assignment) && r.evaluate(assignment),
            Expression::Or(l, r) => l.evaluate(assignment) || r.evaluate(assignment),
            Expression::Xor(l, r) => l.evaluate(assignment) != r.evaluate(assignment),
            Expression::Implies(l, r) => !l.evaluate(assignment) || r.evaluate(assignment),
            Expression::Iff(l, r) => l.evaluate(assignment) == r.evaluate(assignment),
        }
    }
}

// Binary nodes print fully parenthesised; `printer::format_spacing`
// produces the canonical surface form from this.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Var(name) => write!(f, "{}", name),
            Expression::Not(inner) => write!(f, "¬{}", inner),
            Expression::And(l, r) => write!(f, "({}∧{})", l, r),
            Expression::Or(l, r) => write!(f, "({}∨{})", l, r),
            Expression::Xor(l, r) => write!(f, "({}⊕{})", l, r),
            Expression::Implies(l, r) => write!(f, "({}→{})", l, r),
            Expression::Iff(l, r) => write!(f, "({}↔{})", l, r),
        }
    }
}
