//! Lemmon proof reading and whole-proof rule checking

use lemmon::{parse_lemmon, LineRole, LogicError, RuleCode};

const DISTRIBUTION_PROOF: &str = "\
[1]   (1) P ∧ (Q ∨ R)       [Premise]
[1]   (2) P                 [1 ∧E]
[1]   (3) Q ∨ R             [1 ∧E]
[4]   (4) Q                 [Assume]
[1,4] (5) P ∧ Q             [2,4 ∧I]
[1,4] (6) (P ∧ Q) ∨ (P ∧ R) [5 ∨I]
[7]   (7) R                 [Assume]
[1,7] (8) P ∧ R             [2,7 ∧I]
[1,7] (9) (P ∧ Q) ∨ (P ∧ R) [8 ∨I]
[1]  (10) (P ∧ Q) ∨ (P ∧ R) [3,4,6,7,9 ∨E]
";

#[test]
fn test_canonical_proof_parses_and_checks() {
    let lines = parse_lemmon(DISTRIBUTION_PROOF).unwrap();
    assert_eq!(lines.len(), 10);

    assert_eq!(lines[0].role, LineRole::Premise);
    assert_eq!(lines[3].role, LineRole::Assume);
    assert_eq!(lines[6].role, LineRole::Assume);

    for line in &lines {
        if line.is_self_justifying() {
            assert_eq!(line.detected_rule, None);
            continue;
        }
        assert_eq!(
            line.detected_rule,
            line.user_rule_code(),
            "line {} cited {:?} but detector found {:?}",
            line.line,
            line.user_rule,
            line.detected_rule
        );
        assert!(line.user_rule_is_valid(&lines));
    }

    assert_eq!(lines[9].detected_rule, Some(RuleCode::OrElim));
}

#[test]
fn test_detected_rules_by_line() {
    let lines = parse_lemmon(DISTRIBUTION_PROOF).unwrap();
    let detected: Vec<Option<RuleCode>> = lines.iter().map(|l| l.detected_rule).collect();
    assert_eq!(
        detected,
        vec![
            None,
            Some(RuleCode::AndElim),
            Some(RuleCode::AndElim),
            None,
            Some(RuleCode::AndIntro),
            Some(RuleCode::OrIntro),
            None,
            Some(RuleCode::AndIntro),
            Some(RuleCode::OrIntro),
            Some(RuleCode::OrElim),
        ]
    );
}

#[test]
fn test_line_missing_number_group() {
    let err = parse_lemmon("[1] P ∧ Q [Premise]").unwrap_err();
    assert!(matches!(err, LogicError::LemmonParse(_)));
}

#[test]
fn test_line_missing_details_bracket() {
    let err = parse_lemmon("[1] (1) P ∧ Q").unwrap_err();
    assert!(matches!(err, LogicError::LemmonParse(_)));
}

#[test]
fn test_wrong_citation_is_invalid_but_detection_still_reports() {
    let lines = parse_lemmon(
        "[1] (1) P → Q [Premise]\n\
         [2] (2) P [Premise]\n\
         [1,2] (3) Q [1,2 MT]",
    )
    .unwrap();
    assert_eq!(lines[2].detected_rule, Some(RuleCode::Mp));
    assert!(!lines[2].user_rule_is_valid(&lines));
}

#[test]
fn test_disjunctive_syllogism_citation_stays_valid() {
    // MPT wins detection on this shape; citing DS must still check out
    let lines = parse_lemmon(
        "[1] (1) P ∨ Q [Premise]\n\
         [2] (2) ¬P [Premise]\n\
         [1,2] (3) Q [1,2 DS]",
    )
    .unwrap();
    assert_eq!(lines[2].detected_rule, Some(RuleCode::Mpt));
    assert!(lines[2].user_rule_is_valid(&lines));
}

#[test]
fn test_unknown_rule_name_is_invalid() {
    let lines = parse_lemmon(
        "[1] (1) P ∧ Q [Premise]\n\
         [1] (2) P [1 Frobnicate]",
    )
    .unwrap();
    assert_eq!(lines[1].detected_rule, Some(RuleCode::AndElim));
    assert_eq!(lines[1].user_rule_code(), None);
    assert!(!lines[1].user_rule_is_valid(&lines));
}

#[test]
fn test_conditional_proof_subproof() {
    let lines = parse_lemmon(
        "[1] (1) P → Q [Premise]\n\
         [2] (2) P [Assume]\n\
         [1,2] (3) Q [1,2 MP]\n\
         [1] (4) P → Q [2,3 CPA]",
    )
    .unwrap();
    assert_eq!(lines[2].detected_rule, Some(RuleCode::Mp));
    assert_eq!(lines[3].detected_rule, Some(RuleCode::Cpa));
    assert!(lines[3].user_rule_is_valid(&lines));
}
