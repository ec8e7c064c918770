//! HTTP-level integration tests for the banner API.
//!
//! Drives the full router with in-memory state through tower's `oneshot`,
//! covering the banner draft lifecycle, match management, and the logo
//! resolution endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use matchday_banner::api::{create_router, create_router_with_state, AppState};
use matchday_banner::domain::{InMemoryBannerRepository, LogoResolver};
use matchday_banner::infrastructure::logo::{HttpClient, SportsDbSource};
use matchday_banner::infrastructure::services::BannerService;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Build a router backed by in-memory storage and the given resolver chain.
fn create_test_app_with_resolver(resolver: LogoResolver) -> axum::Router {
    let resolver = Arc::new(resolver);
    let repository = Arc::new(InMemoryBannerRepository::new());
    let banner_service = Arc::new(BannerService::new(repository, resolver.clone()));

    create_router_with_state(AppState::new(banner_service, resolver))
}

/// Build a router with an empty resolver chain. Matches added without a
/// logo URL come back with an empty one instead of hitting the network.
fn create_test_app() -> axum::Router {
    create_test_app_with_resolver(LogoResolver::default())
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Match body with both logo URLs supplied, so no resolution runs.
fn sample_match_body() -> Value {
    json!({
        "home_team": "Arsenal",
        "home_logo_url": "https://img.example.com/arsenal.png",
        "away_team": "Chelsea",
        "away_logo_url": "https://img.example.com/chelsea.png",
        "kickoff": "Sat 21:00",
        "odds": { "home": "1.85", "draw": "3.40", "away": "4.20" }
    })
}

/// Create a banner and return its id.
async fn create_banner(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/v1/banners", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

// ============================================================================
// TEST: HEALTH
// ============================================================================

#[tokio::test]
async fn test_health_and_liveness() {
    let resolver =
        LogoResolver::default().with_source(Arc::new(SportsDbSource::new(HttpClient::new())));
    let app = create_test_app_with_resolver(resolver);

    for uri in ["/health", "/live", "/ready"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "unexpected status for {uri}");
    }
}

/// The stateless router exposes liveness probes only.
#[tokio::test]
async fn test_stateless_router_probes() {
    for uri in ["/health", "/live"] {
        let response = create_router().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "unexpected status for {uri}");
    }
}

/// Readiness degrades when no logo sources are configured, but the
/// service keeps accepting requests.
#[tokio::test]
async fn test_readiness_degrades_without_sources() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");

    let checks = body["checks"].as_array().unwrap();
    let resolver_check = checks
        .iter()
        .find(|c| c["name"] == "logo_resolver")
        .unwrap();
    assert_eq!(resolver_check["status"], "unhealthy");
}

// ============================================================================
// TEST: BANNER DRAFTS
// ============================================================================

/// Test the full draft lifecycle.
///
/// Scenario:
/// - Create a draft with an empty body and verify the square default
/// - Fetch it, switch it to the story format, list it
/// - Delete it and verify later fetches return 404
#[tokio::test]
async fn test_banner_lifecycle() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/v1/banners", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["format"], "square");
    assert_eq!(body["width"], 1080);
    assert_eq!(body["height"], 1080);
    assert_eq!(body["matches"], json!([]));
    let banner_id = body["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/v1/banners/{banner_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/banners/{banner_id}"),
            &json!({ "format": "story" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["format"], "story");
    assert_eq!(body["height"], 1920);

    let response = app.clone().oneshot(get_request("/v1/banners")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["banners"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/v1/banners/{banner_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["deleted"], true);

    let response = app
        .oneshot(get_request(&format!("/v1/banners/{banner_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "not_found_error");
}

#[tokio::test]
async fn test_create_banner_with_captions() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/banners",
            &json!({
                "format": "story",
                "config": { "title": "Derby Day", "date": "Saturday 24 August" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["config"]["title"], "Derby Day");
    assert_eq!(body["config"]["date"], "Saturday 24 August");
}

#[tokio::test]
async fn test_malformed_banner_id_is_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/v1/banners/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(body["error"]["param"], "id");
}

// ============================================================================
// TEST: MATCH MANAGEMENT
// ============================================================================

/// Test adding and removing a match.
///
/// Scenario:
/// - Add a match with both logo URLs supplied
/// - Verify team names are uppercased and the URLs pass through
/// - Remove the match and verify the banner is empty again
#[tokio::test]
async fn test_match_lifecycle() {
    let app = create_test_app();
    let banner_id = create_banner(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/v1/banners/{banner_id}/matches"),
            &sample_match_body(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["home"]["name"], "ARSENAL");
    assert_eq!(matches[0]["home"]["logo_url"], "https://img.example.com/arsenal.png");
    assert_eq!(matches[0]["away"]["name"], "CHELSEA");
    assert_eq!(matches[0]["kickoff"], "Sat 21:00");
    assert_eq!(matches[0]["odds"]["home"], "1.85");
    let match_id = matches[0]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/v1/banners/{banner_id}/matches/{match_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["matches"], json!([]));
}

/// A missing logo URL stays empty when the resolver chain finds nothing.
#[tokio::test]
async fn test_unresolved_slot_keeps_empty_logo() {
    let app = create_test_app();
    let banner_id = create_banner(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/v1/banners/{banner_id}/matches"),
            &json!({
                "home_team": "Arsenal",
                "away_team": "Chelsea",
                "away_logo_url": "https://img.example.com/chelsea.png"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["matches"][0]["home"]["logo_url"], "");
    assert_eq!(
        body["matches"][0]["away"]["logo_url"],
        "https://img.example.com/chelsea.png"
    );
}

/// Test the six-match cap.
///
/// Scenario:
/// - Fill a banner with six matches
/// - Verify the seventh is rejected and the banner still holds six
#[tokio::test]
async fn test_match_capacity_limit() {
    let app = create_test_app();
    let banner_id = create_banner(&app).await;

    for _ in 0..6 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/v1/banners/{banner_id}/matches"),
                &sample_match_body(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/v1/banners/{banner_id}/matches"),
            &sample_match_body(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "invalid_request_error");

    let response = app
        .oneshot(get_request(&format!("/v1/banners/{banner_id}")))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["matches"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_remove_unknown_match_returns_not_found() {
    let app = create_test_app();
    let banner_id = create_banner(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!(
                    "/v1/banners/{banner_id}/matches/00000000-0000-0000-0000-000000000000"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// TEST: LOGO RESOLUTION ENDPOINT
// ============================================================================

/// An exhausted chain still answers 200, with an empty URL and a manual
/// search link instead of an error.
#[tokio::test]
async fn test_resolve_endpoint_unresolved() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/v1/logos/resolve?team=Nowhere%20FC"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["team"], "Nowhere FC");
    assert_eq!(body["sport"], "football");
    assert_eq!(body["logo_url"], "");
    assert!(body.get("source").is_none());
    assert!(body["search_url"].as_str().unwrap().contains("tbm=isch"));
}

/// Test resolution through the badge database source.
///
/// Scenario:
/// - Point a single-source chain at a wiremock badge database
/// - Request a basketball team through the API
/// - Verify the badge URL and source name in the response
#[tokio::test]
async fn test_resolve_endpoint_badge_hit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/3/searchteams.php"))
        .and(query_param("t", "Lakers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "teams": [{
                "strTeam": "Los Angeles Lakers",
                "strSport": "Basketball",
                "strTeamBadge": "https://img.example.com/lakers.png"
            }]
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new();
    let source =
        SportsDbSource::with_base_url(client, format!("{}/api/v1/json", server.uri()), "3");
    let app = create_test_app_with_resolver(LogoResolver::default().with_source(Arc::new(source)));

    let response = app
        .oneshot(get_request("/v1/logos/resolve?team=Lakers&sport=basketball"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["logo_url"], "https://img.example.com/lakers.png");
    assert_eq!(body["source"], "sportsdb");
    assert_eq!(body["sport"], "basketball");
}
