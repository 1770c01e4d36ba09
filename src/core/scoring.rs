use crate::models::{MatchResult, Profile};
use std::collections::HashSet;

/// Interests present in both profiles, in the subject's order
///
/// Each shared interest is reported once even if the subject lists it
/// twice. Comparison is exact (case-sensitive).
pub fn shared_interests(subject: &Profile, candidate: &Profile) -> Vec<String> {
    let theirs: HashSet<&str> = candidate.interests.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(subject.interests.len());

    subject
        .interests
        .iter()
        .filter(|interest| theirs.contains(interest.as_str()))
        .filter(|interest| seen.insert(interest.as_str()))
        .cloned()
        .collect()
}

/// Absolute distance between two readiness scores
#[inline]
pub fn readiness_difference(subject: &Profile, candidate: &Profile) -> u8 {
    subject.readiness_score.abs_diff(candidate.readiness_score)
}

/// Build the match record for one compatible candidate
///
/// Candidates without any shared interest are still scored; ranking
/// decides where they land.
pub fn score_candidate(subject: &Profile, candidate: &Profile) -> MatchResult {
    let shared = shared_interests(subject, candidate);

    MatchResult {
        candidate: candidate.clone(),
        interest_count: shared.len(),
        shared_interests: shared,
        readiness_score_difference: readiness_difference(subject, candidate),
    }
}
