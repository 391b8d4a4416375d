//! Integration tests for the model metadata endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn model_metrics_returns_static_snapshot() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/model/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["accuracy"], 0.94);
    assert_eq!(data["precision"], 0.92);
    assert_eq!(data["recall"], 0.90);
}
