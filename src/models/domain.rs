use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender categories known to the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
        };
        f.write_str(label)
    }
}

/// Directory entry for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "readinessScore")]
    pub readiness_score: u8,
    pub gender: Gender,
    #[serde(rename = "genderPreference")]
    pub gender_preference: Vec<Gender>,
    /// Carried for clients, not used in matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Profile {
    /// Whether this profile would accept a partner of the given gender
    #[inline]
    pub fn accepts(&self, gender: Gender) -> bool {
        self.gender_preference.contains(&gender)
    }
}

/// Ranked match record for one compatible candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub candidate: Profile,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
    #[serde(rename = "interestCount")]
    pub interest_count: usize,
    #[serde(rename = "readinessScoreDifference")]
    pub readiness_score_difference: u8,
}

/// Per-request knobs for the matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Truncate the ranked list to this many entries; `None` keeps all.
    pub max_results: Option<usize>,
}

impl MatchOptions {
    pub fn unlimited() -> Self {
        Self { max_results: None }
    }

    pub fn limited(max_results: usize) -> Self {
        Self {
            max_results: Some(max_results),
        }
    }
}
