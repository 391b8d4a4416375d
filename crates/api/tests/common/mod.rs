// Each integration test binary compiles this module separately and uses a
// different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trailguard_api::config::ServerConfig;
use trailguard_api::router::build_app_router;
use trailguard_api::state::AppState;
use trailguard_core::scoring::MockScorer;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and zero mock latency so tests run fast.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        mock_latency_min_ms: 0,
        mock_latency_max_ms: 0,
    }
}

/// Build the full application router with all middleware layers and an
/// instant (zero-latency) mock scorer.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        scorer: Arc::new(MockScorer::instant()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 400 response carrying the standard error envelope with the
/// given code.
pub async fn assert_error_response(response: Response<Body>, code: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}
