// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, MatchOptions, MatchResult, Profile};
pub use requests::FindMatchesQuery;
pub use responses::{ErrorResponse, HealthResponse};
