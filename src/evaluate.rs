use crate::action::Observation;

/// Criteria-list policy (single-task path): every criterion must appear,
/// case-folded, as a substring of at least one observation text. An empty
/// criteria list is vacuously satisfied. Criteria are matched independently,
/// so one observation may satisfy several.
pub fn all_criteria_met(observations: &[Observation], criteria: &[String]) -> bool {
    let lowered: Vec<String> = observations
        .iter()
        .map(|obs| obs.text.to_lowercase())
        .collect();

    criteria.iter().all(|criterion| {
        let target = criterion.to_lowercase();
        lowered.iter().any(|text| text.contains(&target))
    })
}

/// Single-phrase policy (suite path): the phrase must be non-empty and
/// appear, case-folded, in at least one observation text. An empty phrase is
/// a failure, not a vacuous pass; the asymmetry with the criteria-list policy
/// mirrors the two original harnesses and is pinned by tests.
pub fn phrase_present(observations: &[Observation], phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let target = phrase.to_lowercase();
    observations
        .iter()
        .any(|obs| obs.text.to_lowercase().contains(&target))
}
