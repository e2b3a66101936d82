//! Truth-table analysis over whole arguments

use lemmon::{analyse, parse_lemmon, parse_sequent, Classification};

#[test]
fn test_modus_ponens_argument_is_valid() {
    let sequent = parse_sequent("P → Q, P ⊢ Q").unwrap();
    let result = analyse(&sequent.lines());

    assert_eq!(result.variables, vec!["P", "Q"]);
    assert_eq!(result.combinations.len(), 4);
    assert!(result.valid);
    assert!(result.counter_examples.is_empty());
}

#[test]
fn test_affirming_the_consequent_has_counter_example() {
    let sequent = parse_sequent("P → Q, Q ⊢ P").unwrap();
    let result = analyse(&sequent.lines());

    assert!(!result.valid);
    assert_eq!(result.counter_examples.len(), 1);
    let witness = &result.counter_examples[0];
    assert!(!witness.value("P"));
    assert!(witness.value("Q"));
}

#[test]
fn test_counter_examples_witness_the_failure() {
    let sequent = parse_sequent("P ∨ Q ⊢ P ∧ Q").unwrap();
    let lines = sequent.lines();
    let result = analyse(&lines);

    assert!(!result.valid);
    assert_eq!(result.counter_examples.len(), 2);
    for witness in &result.counter_examples {
        assert!(lines[0].ast.evaluate(witness));
        assert!(!lines[1].ast.evaluate(witness));
    }
}

#[test]
fn test_classifications_follow_result_vectors() {
    let sequent = parse_sequent("P ∨ ¬P, P ∧ ¬P ⊢ Q").unwrap();
    let result = analyse(&sequent.lines());

    assert_eq!(result.lines[0].classification, Classification::Tautology);
    assert_eq!(
        result.lines[1].classification,
        Classification::Contradiction
    );
    assert_eq!(result.lines[2].classification, Classification::Contingent);

    for line in &result.lines {
        assert_eq!(
            line.classification,
            Classification::from_results(&line.results)
        );
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let sequent = parse_sequent("P ∧ (Q ∨ R), P → ¬R ⊢ Q ∨ E").unwrap();
    let first = analyse(&sequent.lines());
    let second = analyse(&sequent.lines());
    assert_eq!(first, second);
}

#[test]
fn test_variables_in_first_seen_order() {
    let sequent = parse_sequent("R ∨ Q, P → Q ⊢ R").unwrap();
    let result = analyse(&sequent.lines());
    assert_eq!(result.variables, vec!["R", "Q", "P"]);
}

#[test]
fn test_subexpressions_deduplicated_across_lines() {
    let sequent = parse_sequent("P ∧ Q, (P ∧ Q) → R ⊢ R").unwrap();
    let result = analyse(&sequent.lines());
    let rendered: Vec<&str> = result
        .subexpressions
        .iter()
        .map(|s| s.expression.as_str())
        .collect();
    // P∧Q appears in two lines but once here, before the deeper tree
    assert_eq!(rendered, vec!["P ∧ Q", "(P ∧ Q) → R"]);
}

#[test]
fn test_distribution_proof_analysis() {
    let proof = parse_lemmon(
        "[1]   (1) P ∧ (Q ∨ R)       [Premise]\n\
         [1]   (2) P                 [1 ∧E]\n\
         [1]   (3) Q ∨ R             [1 ∧E]\n\
         [4]   (4) Q                 [Assume]\n\
         [1,4] (5) P ∧ Q             [2,4 ∧I]\n\
         [1,4] (6) (P ∧ Q) ∨ (P ∧ R) [5 ∨I]\n\
         [7]   (7) R                 [Assume]\n\
         [1,7] (8) P ∧ R             [2,7 ∧I]\n\
         [1,7] (9) (P ∧ Q) ∨ (P ∧ R) [8 ∨I]\n\
         [1]  (10) (P ∧ Q) ∨ (P ∧ R) [3,4,6,7,9 ∨E]",
    )
    .unwrap();

    let result = analyse(&proof);
    assert_eq!(result.variables, vec!["P", "Q", "R"]);
    assert_eq!(result.combinations.len(), 8);
    assert!(result.valid);
    for line in &result.lines {
        assert_eq!(line.classification, Classification::Contingent);
    }
}

#[test]
fn test_empty_premises_conclusion_decides_validity() {
    let tautology = parse_sequent("⊢ (P → Q) ∨ (Q → P)").unwrap();
    assert!(analyse(&tautology.lines()).valid);

    let contingent = parse_sequent("⊢ P → Q").unwrap();
    let result = analyse(&contingent.lines());
    assert!(!result.valid);
    assert!(!result.counter_examples.is_empty());
}
