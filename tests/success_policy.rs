use arena_harness::action::Observation;
use arena_harness::evaluate::{all_criteria_met, phrase_present};

fn obs(text: &str) -> Observation {
    Observation {
        text: text.to_string(),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn criterion_matches_case_insensitively() {
    let observations = vec![obs("User Logged In successfully")];
    let criteria = vec!["Logged in".to_string()];
    assert!(all_criteria_met(&observations, &criteria));
}

#[test]
fn criterion_absent_fails() {
    let observations = vec![obs("Login failed")];
    let criteria = vec!["Logged in".to_string()];
    assert!(!all_criteria_met(&observations, &criteria));
}

#[test]
fn empty_criteria_list_is_vacuously_true() {
    let observations = vec![obs("anything at all")];
    assert!(all_criteria_met(&observations, &[]));
    assert!(all_criteria_met(&[], &[]));
}

#[test]
fn every_criterion_must_match_somewhere() {
    let observations = vec![obs("cart has 3 items"), obs("checkout complete")];
    let both = vec!["cart".to_string(), "checkout".to_string()];
    assert!(all_criteria_met(&observations, &both));

    let one_missing = vec!["cart".to_string(), "refund".to_string()];
    assert!(!all_criteria_met(&observations, &one_missing));
}

#[test]
fn one_observation_may_satisfy_multiple_criteria() {
    let observations = vec![obs("order placed and invoice emailed")];
    let criteria = vec!["order placed".to_string(), "invoice".to_string()];
    assert!(all_criteria_met(&observations, &criteria));
}

#[test]
fn phrase_matches_case_insensitively() {
    let observations = vec![obs("Welcome back, ADMIN")];
    assert!(phrase_present(&observations, "welcome back"));
    assert!(!phrase_present(&observations, "goodbye"));
}

#[test]
fn empty_phrase_always_fails() {
    let observations = vec![obs(""), obs("some text")];
    assert!(!phrase_present(&observations, ""));
    assert!(!phrase_present(&[], ""));
}

// The two policies deliberately disagree on the degenerate input: an empty
// criteria list passes, an empty phrase fails.
#[test]
fn vacuous_inputs_diverge_between_policies() {
    let observations = vec![obs("evidence")];
    assert!(all_criteria_met(&observations, &[]));
    assert!(!phrase_present(&observations, ""));
}

#[test]
fn missing_text_deserializes_as_empty() {
    let observation: Observation = serde_json::from_str(r#"{"kind":"screenshot"}"#).unwrap();
    assert_eq!(observation.text, "");
    assert!(!phrase_present(&[observation], "anything"));
}
