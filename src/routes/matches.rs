use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{MatchError, Matcher};
use crate::models::{ErrorResponse, FindMatchesQuery, HealthResponse, MatchOptions};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::get().to(find_matches));
}

impl ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MatchError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            MatchError::InvalidInput(_) => "invalid_input",
            MatchError::NotFound(_) => "not_found",
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles: state.matcher.directory().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// GET /match?id={id}&limit={n}
///
/// Responds with a JSON array of match records, best first. `userId` is
/// accepted as an alias for `id`; `limit` is optional.
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<FindMatchesQuery>,
) -> Result<HttpResponse, MatchError> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return Err(MatchError::InvalidInput(errors.to_string()));
    }

    let subject_id = query.subject_id();
    let options = MatchOptions {
        max_results: state.matching.effective_limit(query.limit),
    };

    tracing::info!("Finding matches for user: {}, limit: {:?}", subject_id, options.max_results);

    let matches = state.matcher.find_matches(subject_id, options).map_err(|e| {
        tracing::warn!("Match lookup failed for {}: {}", subject_id, e);
        e
    })?;

    tracing::info!("Returning {} matches for user {}", matches.len(), subject_id);

    Ok(HttpResponse::Ok().json(matches))
}
