//! Shunting-Yard parser producing the formula AST

use super::token::{Operator, Token};
use crate::error::{LogicError, Result};
use crate::logic::Expression;

/// Parse a token list into an AST.
///
/// First pass is the standard Shunting-Yard rearrangement into reverse
/// Polish order; the second pass folds the RPN into a tree. Negation
/// pops one operand, binary operators pop right then left.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expression> {
    build_ast(&to_rpn(tokens)?)
}

fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Var(_) => output.push(token.clone()),
            Token::Op(op) => {
                while let Some(&Token::Op(top)) = stack.last() {
                    let pops = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && !op.is_right_associative());
                    if !pops {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Op(top));
                }
                stack.push(token.clone());
            }
            Token::LParen => stack.push(Token::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(LogicError::UnbalancedParens),
                }
            },
        }
    }

    while let Some(item) = stack.pop() {
        if item == Token::LParen {
            return Err(LogicError::UnbalancedParens);
        }
        output.push(item);
    }

    Ok(output)
}

fn build_ast(rpn: &[Token]) -> Result<Expression> {
    let mut stack: Vec<Expression> = Vec::new();

    for token in rpn {
        match token {
            Token::Var(name) => stack.push(Expression::Var(name.clone())),
            Token::Op(Operator::Not) => {
                let inner = stack.pop().ok_or(LogicError::MissingNotOperand)?;
                stack.push(Expression::not(inner));
            }
            Token::Op(op) => {
                let right = stack
                    .pop()
                    .ok_or(LogicError::InsufficientOperands(op.symbol()))?;
                let left = stack
                    .pop()
                    .ok_or(LogicError::InsufficientOperands(op.symbol()))?;
                stack.push(match op {
                    Operator::And => Expression::and(left, right),
                    Operator::Or => Expression::or(left, right),
                    Operator::Xor => Expression::xor(left, right),
                    Operator::Implies => Expression::implies(left, right),
                    Operator::Iff => Expression::iff(left, right),
                    // handled above; kept for future operator additions
                    Operator::Not => return Err(LogicError::UnknownOperator("¬".to_string())),
                });
            }
            // parentheses never survive the first pass
            Token::LParen => return Err(LogicError::UnknownOperator("(".to_string())),
            Token::RParen => return Err(LogicError::UnknownOperator(")".to_string())),
        }
    }

    match (stack.pop(), stack.pop()) {
        (Some(expr), None) => Ok(expr),
        _ => Err(LogicError::MalformedExpression),
    }
}
