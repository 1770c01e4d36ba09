use crate::models::MatchResult;
use std::cmp::Ordering;

/// Ranking order between two match records
///
/// Closer readiness wins; among equal readiness, more shared
/// interests wins. Everything else compares equal.
#[inline]
pub fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.readiness_score_difference
        .cmp(&b.readiness_score_difference)
        .then_with(|| b.interest_count.cmp(&a.interest_count))
}

/// Sort match records into ranked order
///
/// `sort_by` is stable, so full ties keep their incoming (directory) order.
pub fn rank_matches(mut matches: Vec<MatchResult>) -> Vec<MatchResult> {
    matches.sort_by(compare_matches);
    matches
}

/// Keep at most `max_results` entries; `None` keeps everything
pub fn limit_matches(mut matches: Vec<MatchResult>, max_results: Option<usize>) -> Vec<MatchResult> {
    if let Some(max) = max_results {
        matches.truncate(max);
    }
    matches
}
