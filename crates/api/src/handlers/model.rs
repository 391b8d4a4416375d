//! Handlers for model metadata endpoints.

use axum::response::IntoResponse;
use axum::Json;
use trailguard_core::model_metrics::ModelQualityMetrics;

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /model/metrics -- static model-quality metrics for the dashboard.
pub async fn model_metrics() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ModelQualityMetrics::current(),
    }))
}
