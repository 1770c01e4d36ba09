use crate::models::Profile;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Seed dataset used when no directory file is configured
const EMBEDDED_PROFILES: &str = include_str!("../../data/profiles.json");

/// Errors that can occur while loading the profile directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Profile at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),

    #[error("Profile {0} has an empty gender preference")]
    EmptyGenderPreference(String),
}

/// Immutable, indexed snapshot of every profile
///
/// Iteration follows load order, which is also the tie-break order
/// for ranking. Lookups by id go through a hash index.
#[derive(Debug, Clone, Default)]
pub struct ProfileDirectory {
    profiles: Vec<Profile>,
    index: HashMap<String, usize>,
}

impl ProfileDirectory {
    /// Build a directory from already-parsed profiles
    pub fn new(profiles: Vec<Profile>) -> Result<Self, DirectoryError> {
        let mut index = HashMap::with_capacity(profiles.len());

        for (position, profile) in profiles.iter().enumerate() {
            if profile.id.trim().is_empty() {
                return Err(DirectoryError::EmptyId(position));
            }
            if profile.gender_preference.is_empty() {
                return Err(DirectoryError::EmptyGenderPreference(profile.id.clone()));
            }
            if index.insert(profile.id.clone(), position).is_some() {
                return Err(DirectoryError::DuplicateId(profile.id.clone()));
            }
        }

        Ok(Self { profiles, index })
    }

    /// Parse a JSON array of profiles
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let profiles: Vec<Profile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    /// Read and parse a JSON directory file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let directory = Self::from_json(&json)?;

        tracing::debug!(
            "Loaded {} profiles from {}",
            directory.len(),
            path.as_ref().display()
        );

        Ok(directory)
    }

    /// The bundled seed dataset
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_PROFILES)
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.index.get(id).map(|&position| &self.profiles[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
