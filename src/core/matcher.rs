use crate::models::{MatchOptions, MatchResult, Profile};
use crate::core::{
    filters::compatible_candidates,
    ranking::{limit_matches, rank_matches},
    scoring::score_candidate,
};
use crate::services::ProfileDirectory;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by the matcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Profile not found: {0}")]
    NotFound(String),
}

/// Main matching orchestrator over a read-only profile directory
///
/// # Pipeline Stages
/// 1. Resolve the subject profile
/// 2. Filter to mutually compatible candidates
/// 3. Score shared interests and readiness distance
/// 4. Rank
/// 5. Limit
///
/// Cloning is cheap; every clone shares the same directory.
#[derive(Debug, Clone)]
pub struct Matcher {
    directory: Arc<ProfileDirectory>,
}

impl Matcher {
    pub fn new(directory: ProfileDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Build a matcher over a directory that is already shared
    pub fn from_shared(directory: Arc<ProfileDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &ProfileDirectory {
        &self.directory
    }

    /// Look up the subject profile
    pub fn resolve(&self, subject_id: &str) -> Result<&Profile, MatchError> {
        if subject_id.is_empty() {
            return Err(MatchError::InvalidInput("subject id must not be empty".to_string()));
        }

        self.directory
            .get(subject_id)
            .ok_or_else(|| MatchError::NotFound(subject_id.to_string()))
    }

    /// Find ranked matches for a subject
    ///
    /// # Arguments
    /// * `subject_id` - Id of the profile to match for
    /// * `options` - Optional result cap
    ///
    /// # Returns
    /// Every mutually compatible candidate, best first. An empty list is a
    /// valid result, not an error.
    pub fn find_matches(
        &self,
        subject_id: &str,
        options: MatchOptions,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let subject = self.resolve(subject_id)?;

        let candidates = compatible_candidates(subject, self.directory.iter());
        let total_candidates = candidates.len();

        let scored: Vec<MatchResult> = candidates
            .into_iter()
            .map(|candidate| score_candidate(subject, candidate))
            .collect();

        let matches = limit_matches(rank_matches(scored), options.max_results);

        tracing::debug!(
            "Matched {} -> {} results (from {} compatible of {} profiles)",
            subject_id,
            matches.len(),
            total_candidates,
            self.directory.len()
        );

        Ok(matches)
    }
}
