//! Parsing: tokenizer, Shunting-Yard parser, and the two line readers

pub mod lemmon;
pub mod sequent;
pub mod shunting;
pub mod token;

pub use lemmon::parse_lemmon;
pub use sequent::{parse_sequent, Sequent};
pub use shunting::parse_tokens;
pub use token::{tokenize, Operator, Token};

use crate::error::Result;
use crate::logic::Expression;

/// Parse a formula string into an AST. Variable case is preserved;
/// the line readers upper-case their input before calling this.
pub fn parse_formula(text: &str) -> Result<Expression> {
    parse_tokens(&tokenize(text)?)
}
