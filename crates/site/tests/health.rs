//! Integration tests for the health endpoint and general HTTP behaviour.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, build_test_app, get};

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("response must contain an x-request-id header");

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.to_str().unwrap();
    assert_eq!(id_str.len(), 36);
    assert_eq!(id_str.matches('-').count(), 4);
}

// ---------------------------------------------------------------------------
// Test: static assets are served under /static
// ---------------------------------------------------------------------------

#[tokio::test]
async fn static_stylesheet_is_served() {
    let response = get(build_test_app(), "/static/css/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("stylesheet response must have a content type")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/css"),
        "unexpected content type: {content_type}"
    );
}
