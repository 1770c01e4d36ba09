//! Kindred - compatibility matching over an in-memory profile directory
//!
//! Given a subject profile, the matcher keeps every mutually compatible
//! candidate, scores shared interests and readiness distance, and returns
//! a deterministic ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchError, Matcher};
pub use crate::models::{Gender, MatchOptions, MatchResult, Profile};
pub use crate::services::{DirectoryError, ProfileDirectory};
