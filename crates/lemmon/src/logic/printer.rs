//! Canonical formula rendering

use super::expr::Expression;

const BINARY_OPERATORS: [char; 5] = ['∧', '∨', '⊕', '→', '↔'];

/// Canonical surface form of a formula: spaced binary operators, tight
/// negations, no redundant outer parentheses.
pub fn canonical(expr: &Expression) -> String {
    format_spacing(&expr.to_string())
}

/// Normalise the spacing of a formula string.
///
/// Negations sit flush against their operand, binary operators get
/// exactly one space on each side, parentheses hug their contents, and
/// one fully redundant outer parenthesis pair is stripped.
pub fn format_spacing(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '¬' => {
                out.push('¬');
                while chars.peek().is_some_and(|w| w.is_whitespace()) {
                    chars.next();
                }
            }
            c if BINARY_OPERATORS.contains(&c) => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(' ');
                out.push(c);
                out.push(' ');
                while chars.peek().is_some_and(|w| w.is_whitespace()) {
                    chars.next();
                }
            }
            '(' => {
                out.push('(');
                while chars.peek().is_some_and(|w| w.is_whitespace()) {
                    chars.next();
                }
            }
            ')' => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(')');
            }
            c if c.is_whitespace() => {
                if !out.is_empty() && !out.ends_with(' ') && !out.ends_with('(') {
                    out.push(' ');
                }
            }
            c => out.push(c),
        }
    }

    strip_outer_parens(out.trim()).to_string()
}

/// Strip one outer parenthesis pair when it wraps the whole string.
fn strip_outer_parens(s: &str) -> &str {
    if !s.starts_with('(') || !s.ends_with(')') {
        return s;
    }
    let mut depth: i64 = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth <= 0 && i != s.len() - 1 {
                    return s;
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return s;
    }
    &s[1..s.len() - 1]
}
