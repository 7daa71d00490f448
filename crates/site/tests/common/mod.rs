use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_core::Catalog;
use folio_site::config::ServerConfig;
use folio_site::router::build_app_router;
use folio_site::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers.
///
/// Uses the same `build_app_router` as `main.rs`, so integration tests
/// exercise the production middleware stack (request ID, timeout, tracing,
/// panic recovery).
pub fn build_test_app() -> Router {
    let catalog = Catalog::load();
    catalog
        .validate()
        .expect("embedded catalog must be valid in tests");

    let state = AppState {
        catalog: Arc::new(catalog),
        config: Arc::new(test_config()),
    };

    build_app_router(state)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body into a UTF-8 string.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be valid UTF-8")
}

/// Collect a response body and parse it as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
