// Integration tests for Kindred

use actix_web::{http::StatusCode, test as actix_test, web, App};
use kindred::config::MatchingSettings;
use kindred::core::{is_mutually_compatible, MatchError, Matcher};
use kindred::models::{Gender, MatchOptions, Profile};
use kindred::routes::{self, AppState};
use kindred::services::ProfileDirectory;
use serde_json::Value;

fn create_test_profile(
    id: &str,
    gender: Gender,
    preference: &[Gender],
    interests: &[&str],
    readiness_score: u8,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        readiness_score,
        gender,
        gender_preference: preference.to_vec(),
        height: None,
    }
}

fn embedded_matcher() -> Matcher {
    Matcher::new(ProfileDirectory::embedded().unwrap())
}

fn ids(matcher: &Matcher, subject_id: &str, options: MatchOptions) -> Vec<String> {
    matcher
        .find_matches(subject_id, options)
        .unwrap()
        .into_iter()
        .map(|m| m.candidate.id)
        .collect()
}

#[test]
fn test_alice_and_bob() {
    let matcher = Matcher::new(
        ProfileDirectory::new(vec![
            create_test_profile("alice", Gender::Male, &[Gender::Female], &["hiking", "reading"], 8),
            create_test_profile("bob", Gender::Female, &[Gender::Male], &["reading", "cooking"], 7),
        ])
        .unwrap(),
    );

    let matches = matcher.find_matches("alice", MatchOptions::default()).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].candidate.id, "bob");
    assert_eq!(matches[0].shared_interests, vec!["reading"]);
    assert_eq!(matches[0].interest_count, 1);
    assert_eq!(matches[0].readiness_score_difference, 1);
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = embedded_matcher();

    let matches = matcher.find_matches("1", MatchOptions::default()).unwrap();
    let ranked: Vec<&str> = matches.iter().map(|m| m.candidate.id.as_str()).collect();

    // Bob and Carlos tie on readiness, Bob shares more interests
    assert_eq!(ranked, vec!["2", "4", "7"]);
    assert_eq!(matches[0].shared_interests, vec!["reading", "cooking"]);
    assert_eq!(matches[1].shared_interests, vec!["hiking"]);
    assert!(matches[2].shared_interests.is_empty());
}

#[test]
fn test_exclusive_preference_yields_empty() {
    let matcher = embedded_matcher();

    let matches = matcher.find_matches("3", MatchOptions::default()).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_properties_hold_for_every_subject() {
    let matcher = embedded_matcher();
    let directory = matcher.directory();

    for subject in directory.iter() {
        let matches = matcher.find_matches(&subject.id, MatchOptions::default()).unwrap();

        for m in &matches {
            assert_ne!(m.candidate.id, subject.id, "subject matched itself");
            assert!(is_mutually_compatible(subject, &m.candidate));
            assert_eq!(m.shared_interests.len(), m.interest_count);
        }

        for pair in matches.windows(2) {
            assert!(pair[0].readiness_score_difference <= pair[1].readiness_score_difference);
            if pair[0].readiness_score_difference == pair[1].readiness_score_difference {
                assert!(pair[0].interest_count >= pair[1].interest_count);
            }
        }

        let expected = directory
            .iter()
            .filter(|c| c.id != subject.id && is_mutually_compatible(subject, c))
            .count();
        assert_eq!(matches.len(), expected);
    }
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let matcher = embedded_matcher();

    let first = matcher.find_matches("6", MatchOptions::default()).unwrap();
    for _ in 0..10 {
        assert_eq!(matcher.find_matches("6", MatchOptions::default()).unwrap(), first);
    }
}

#[test]
fn test_ties_keep_directory_order() {
    let matcher = Matcher::new(
        ProfileDirectory::new(vec![
            create_test_profile("z", Gender::Female, &[Gender::Male], &["music"], 4),
            create_test_profile("s", Gender::Male, &[Gender::Female], &["music"], 5),
            create_test_profile("y", Gender::Female, &[Gender::Male], &["music"], 6),
            create_test_profile("x", Gender::Female, &[Gender::Male], &["music"], 4),
        ])
        .unwrap(),
    );

    assert_eq!(ids(&matcher, "s", MatchOptions::default()), vec!["z", "y", "x"]);
}

#[test]
fn test_max_limit_enforcement() {
    let matcher = embedded_matcher();

    let all = ids(&matcher, "6", MatchOptions::unlimited());
    let top = ids(&matcher, "6", MatchOptions::limited(2));

    assert!(all.len() > 2);
    assert_eq!(top, all[..2].to_vec());
}

#[test]
fn test_unknown_subject_not_found() {
    let matcher = embedded_matcher();

    assert_eq!(
        matcher.find_matches("nonexistent", MatchOptions::default()),
        Err(MatchError::NotFound("nonexistent".to_string()))
    );
}

#[test]
fn test_concurrent_lookups_share_directory() {
    let matcher = embedded_matcher();
    let expected = ids(&matcher, "1", MatchOptions::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let matcher = matcher.clone();
            std::thread::spawn(move || ids(&matcher, "1", MatchOptions::default()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn app_state(matching: MatchingSettings) -> AppState {
    AppState {
        matcher: embedded_matcher(),
        matching,
    }
}

macro_rules! init_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_http_unknown_user_is_404() {
    let app = init_app!(app_state(MatchingSettings::default()));

    let req = actix_test::TestRequest::get().uri("/match?id=nonexistent").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["status_code"], 404);
}

#[actix_web::test]
async fn test_http_missing_or_blank_id_is_400() {
    let app = init_app!(app_state(MatchingSettings::default()));

    for uri in ["/match", "/match?id=", "/match?id=%20%20"] {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
    }
}

#[actix_web::test]
async fn test_http_malformed_limit_is_400() {
    let app = init_app!(app_state(MatchingSettings::default()));

    let req = actix_test::TestRequest::get().uri("/match?id=1&limit=lots").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_query");
}

#[actix_web::test]
async fn test_http_returns_ranked_array() {
    let app = init_app!(app_state(MatchingSettings::default()));

    let req = actix_test::TestRequest::get().uri("/match?id=1").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(resp).await;
    let matches = body.as_array().unwrap();

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["id"], "2");
    assert_eq!(matches[0]["name"], "Bob");
    assert_eq!(matches[0]["sharedInterests"], serde_json::json!(["reading", "cooking"]));
    assert_eq!(matches[0]["interestCount"], 2);
    assert_eq!(matches[0]["readinessScoreDifference"], 1);
}

#[actix_web::test]
async fn test_http_no_matches_is_empty_array() {
    let app = init_app!(app_state(MatchingSettings::default()));

    let req = actix_test::TestRequest::get().uri("/match?id=3").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn test_http_versioned_route_with_limits() {
    let app = init_app!(app_state(MatchingSettings {
        default_limit: Some(2),
        max_limit: 100,
    }));

    let req = actix_test::TestRequest::get().uri("/api/v1/match?userId=1").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let req = actix_test::TestRequest::get().uri("/api/v1/match?userId=1&limit=1").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "2");
}

#[actix_web::test]
async fn test_http_health() {
    let app = init_app!(app_state(MatchingSettings::default()));

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["profiles"], 10);
}

#[actix_web::test]
async fn test_http_subject_id_matched_exactly() {
    let directory = ProfileDirectory::new(vec![
        create_test_profile(" 7", Gender::Male, &[Gender::Female], &["music"], 5),
        create_test_profile("1", Gender::Female, &[Gender::Male], &["music"], 6),
    ])
    .unwrap();
    let app = init_app!(AppState {
        matcher: Matcher::new(directory),
        matching: MatchingSettings::default(),
    });

    let req = actix_test::TestRequest::get().uri("/match?id=%207").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body[0]["id"], "1");

    let req = actix_test::TestRequest::get().uri("/match?id=%201%20").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = actix_test::TestRequest::get().uri("/match?id=7").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
