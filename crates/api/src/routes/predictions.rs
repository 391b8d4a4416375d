//! Route definitions for simulated classification.

use axum::routing::post;
use axum::Router;

use crate::handlers::predictions;
use crate::state::AppState;

/// Prediction routes mounted at `/predictions`.
///
/// ```text
/// POST /factors    -> predict_from_factors
/// POST /embedding  -> predict_from_embedding
/// ```
pub fn predictions_router() -> Router<AppState> {
    Router::new()
        .route("/factors", post(predictions::predict_from_factors))
        .route("/embedding", post(predictions::predict_from_embedding))
}
