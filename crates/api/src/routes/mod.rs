pub mod health;
pub mod model;
pub mod predictions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /predictions/factors     simulated classification from monitoring factors (POST)
/// /predictions/embedding   simulated classification from a raw embedding (POST)
///
/// /model/metrics           static model-quality metrics (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/predictions", predictions::predictions_router())
        .nest("/model", model::model_router())
}
