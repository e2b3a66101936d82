//! Lemmon proof-line reader
//!
//! One line per step:
//!
//! ```text
//! [<assumptions>]   (<n>)   <formula>   [<details>]
//! ```
//!
//! `<details>` is zero or more comma-separated line numbers followed by
//! a rule token (`Premise`, `Assume`, or a rule alias).

use crate::detect::detect_rule;
use crate::error::{LogicError, Result};
use crate::logic::canonical;
use crate::parser::parse_formula;
use crate::proof::{LineRole, ProofLine, RuleCode};
use regex::Regex;
use std::sync::OnceLock;

static LINE_RE: OnceLock<Regex> = OnceLock::new();

fn line_regex() -> &'static Regex {
    LINE_RE.get_or_init(|| {
        Regex::new(r"^\[\s*([0-9,\s]*)\]\s*\((\d+)\)\s*(.+?)\s*\[([^\[\]]*)\]$")
            .expect("proof line pattern")
    })
}

/// Parse a Lemmon-style deduction and run rule detection on each line.
///
/// Blank lines are skipped; any other line that does not match the
/// proof-line shape is a [`LogicError::LemmonParse`]. Formula text is
/// upper-cased before parsing.
pub fn parse_lemmon(text: &str) -> Result<Vec<ProofLine>> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        lines.push(parse_line(raw)?);
    }

    let detected: Vec<Option<RuleCode>> = lines
        .iter()
        .map(|line| {
            if line.is_self_justifying() {
                None
            } else {
                detect_rule(line, &lines)
            }
        })
        .collect();
    for (line, rule) in lines.iter_mut().zip(detected) {
        line.detected_rule = rule;
    }

    Ok(lines)
}

fn parse_line(raw: &str) -> Result<ProofLine> {
    let parse_error = || LogicError::LemmonParse(raw.to_string());
    let caps = line_regex().captures(raw).ok_or_else(parse_error)?;

    let assumptions = number_list(&caps[1]).ok_or_else(parse_error)?;
    let number: usize = caps[2].parse().map_err(|_| parse_error())?;
    let ast = parse_formula(&caps[3].to_uppercase())?;
    let (cited_refs, user_rule) = split_details(&caps[4]);

    // A line depending only on itself, with a rule token, justifies
    // itself: `Premise` exactly, anything else is an assumption.
    let role = if assumptions == [number] && user_rule.is_some() {
        if user_rule.as_deref() == Some("Premise") {
            LineRole::Premise
        } else {
            LineRole::Assume
        }
    } else {
        LineRole::Derived
    };

    let cited_refs = match role {
        LineRole::Premise | LineRole::Assume => vec![number],
        LineRole::Derived => cited_refs,
    };

    Ok(ProofLine {
        line: number,
        assumptions,
        formula: canonical(&ast),
        ast,
        cited_refs,
        user_rule,
        role,
        detected_rule: None,
    })
}

fn number_list(text: &str) -> Option<Vec<usize>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}

/// Split the trailing details bracket into cited line numbers and the
/// rule token. Numbers stop at the first non-numeric part; whatever
/// remains is the rule name.
fn split_details(details: &str) -> (Vec<usize>, Option<String>) {
    let mut refs = Vec::new();
    let mut rule_parts: Vec<&str> = Vec::new();
    for part in details
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
    {
        if rule_parts.is_empty() {
            if let Ok(n) = part.parse::<usize>() {
                refs.push(n);
                continue;
            }
        }
        rule_parts.push(part);
    }
    let rule = if rule_parts.is_empty() {
        None
    } else {
        Some(rule_parts.join(" "))
    };
    (refs, rule)
}
