//! Error types for the analyser

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("negation has no operand")]
    MissingNotOperand,

    #[error("operator `{0}` has too few operands")]
    InsufficientOperands(&'static str),

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    #[error("malformed expression")]
    MalformedExpression,

    #[error("unexpected character `{ch}` at byte {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("expected exactly one `⊢` between premises and conclusion")]
    InvalidConclusion,

    #[error("not a valid Lemmon proof line: `{0}`")]
    LemmonParse(String),

    #[error("only propositional logic is supported")]
    UnsupportedLogicType,
}

pub type Result<T> = std::result::Result<T, LogicError>;
