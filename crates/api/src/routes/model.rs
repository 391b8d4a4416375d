//! Route definitions for model metadata.

use axum::routing::get;
use axum::Router;

use crate::handlers::model;
use crate::state::AppState;

/// Model metadata routes mounted at `/model`.
///
/// ```text
/// GET /metrics -> model_metrics
/// ```
pub fn model_router() -> Router<AppState> {
    Router::new().route("/metrics", get(model::model_metrics))
}
