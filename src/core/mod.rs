// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod ranking;
pub mod scoring;

pub use filters::{compatible_candidates, is_candidate, is_mutually_compatible};
pub use matcher::{MatchError, Matcher};
pub use ranking::{compare_matches, limit_matches, rank_matches};
pub use scoring::{readiness_difference, score_candidate, shared_interests};
