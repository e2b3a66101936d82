//! Tokenizer for the formula surface syntax

use crate::error::{LogicError, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::value,
    IResult,
};
use std::fmt;
use std::str::FromStr;

/// A propositional connective, in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl Operator {
    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 5,
            Operator::And => 4,
            Operator::Or | Operator::Xor => 3,
            Operator::Implies => 2,
            Operator::Iff => 1,
        }
    }

    /// ¬ and → associate to the right, the rest to the left
    pub fn is_right_associative(self) -> bool {
        matches!(self, Operator::Not | Operator::Implies)
    }

    /// Canonical operator symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "¬",
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Xor => "⊕",
            Operator::Implies => "→",
            Operator::Iff => "↔",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "¬" => Ok(Operator::Not),
            "∧" => Ok(Operator::And),
            "∨" => Ok(Operator::Or),
            "⊕" => Ok(Operator::Xor),
            "→" => Ok(Operator::Implies),
            "↔" => Ok(Operator::Iff),
            other => Err(LogicError::UnknownOperator(other.to_string())),
        }
    }
}

/// A lexical token of the formula surface syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LParen,
    RParen,
    Op(Operator),
    Var(String),
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Symbolic operator aliases. Order matters inside each `alt`: the
/// two-character spellings must come before their one-character
/// prefixes, and `<->` is tried before `->`.
fn symbol_token(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::LParen, tag("(")),
        value(Token::RParen, tag(")")),
        value(Token::Op(Operator::Not), alt((tag("¬"), tag("~"), tag("!")))),
        value(
            Token::Op(Operator::And),
            alt((tag("∧"), tag("&&"), tag("&"), tag("/\\"))),
        ),
        value(
            Token::Op(Operator::Or),
            alt((tag("∨"), tag("||"), tag("|"), tag("\\/"))),
        ),
        value(Token::Op(Operator::Xor), alt((tag("⊕"), tag("⊻")))),
        value(
            Token::Op(Operator::Iff),
            alt((tag("↔"), tag("≡"), tag("<->"))),
        ),
        value(Token::Op(Operator::Implies), alt((tag("→"), tag("->")))),
    ))(input)
}

/// Identifiers are lexed whole, then matched against the word aliases,
/// so `NOTE` stays a variable while `not` is a negation.
fn word_token(input: &str) -> IResult<&str, Token> {
    let (rest, word) = take_while1(is_ident_char)(input)?;
    let token = match word.to_uppercase().as_str() {
        "NOT" => Token::Op(Operator::Not),
        "AND" => Token::Op(Operator::And),
        "OR" => Token::Op(Operator::Or),
        "XOR" => Token::Op(Operator::Xor),
        "IMP" => Token::Op(Operator::Implies),
        "EQ" => Token::Op(Operator::Iff),
        _ => Token::Var(word.to_string()),
    };
    Ok((rest, token))
}

/// Tokenize a formula string into parentheses, canonical operators and
/// variable identifiers. Whitespace separates tokens and is dropped.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = input;
    loop {
        rest = rest.trim_start();
        let Some(next) = rest.chars().next() else {
            break;
        };
        if next == '∀' || next == '∃' {
            return Err(LogicError::UnsupportedLogicType);
        }
        match alt((symbol_token, word_token))(rest) {
            Ok((remaining, token)) => {
                tokens.push(token);
                rest = remaining;
            }
            Err(_) => {
                return Err(LogicError::InvalidCharacter {
                    ch: next,
                    pos: input.len() - rest.len(),
                })
            }
        }
    }
    Ok(tokens)
}
