//! Handlers for the simulated classification endpoints.
//!
//! Both endpoints delegate the contractual work to `trailguard_core`: rule
//! evaluation for the factors path, input validation for the embedding path.
//! The probability/confidence numbers come from the configured scorer and
//! are cosmetic.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use trailguard_core::embedding::{parse_embedding, validate_embedding};
use trailguard_core::model_metrics::ModelQualityMetrics;
use trailguard_core::monitoring::{evaluate_factors, MonitoringFactors};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Display label when at least one monitoring rule fired.
pub const LABEL_ANOMALY: &str = "Anomaly Detected";
/// Display label when no monitoring rule fired.
pub const LABEL_NORMAL: &str = "Normal Behavior";

/// Probability at or above which an embedding prediction reads as anomalous.
pub const EMBEDDING_ANOMALY_THRESHOLD: f64 = 0.5;

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// A simulated classification result as shown on the dashboard.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Binary display label.
    pub label: &'static str,
    /// Cosmetic anomaly probability in `[0, 1]`.
    pub probability: f64,
    /// Cosmetic scorer confidence in `[0, 1]`.
    pub confidence: f64,
    /// Labels of the monitoring rules that fired, in rule order.
    /// Always empty for embedding predictions.
    pub triggered_factors: Vec<&'static str>,
    /// True iff at least one rule fired (factors) or the probability
    /// crossed the display threshold (embedding).
    pub anomaly_flag: bool,
    /// Static model-quality metrics, echoed for the dashboard header.
    pub model: ModelQualityMetrics,
}

// ---------------------------------------------------------------------------
// POST /predictions/factors
// ---------------------------------------------------------------------------

/// Classify a monitoring-factor snapshot.
///
/// All fields are optional; missing ones take their safe defaults. The
/// triggered-factor list and anomaly flag come from the deterministic rule
/// evaluator; probability and confidence come from the scorer.
pub async fn predict_from_factors(
    State(state): State<AppState>,
    Json(factors): Json<MonitoringFactors>,
) -> AppResult<impl IntoResponse> {
    let evaluation = evaluate_factors(&factors);
    let score = state.scorer.score_factors(&factors).await;

    let label = if evaluation.anomaly_flag {
        LABEL_ANOMALY
    } else {
        LABEL_NORMAL
    };

    tracing::debug!(
        triggered = evaluation.triggered_factors.len(),
        anomaly = evaluation.anomaly_flag,
        "Evaluated monitoring factors"
    );

    Ok(Json(DataResponse {
        data: PredictionResponse {
            label,
            probability: score.probability,
            confidence: score.confidence,
            triggered_factors: evaluation.triggered_factors,
            anomaly_flag: evaluation.anomaly_flag,
            model: ModelQualityMetrics::current(),
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /predictions/embedding
// ---------------------------------------------------------------------------

/// Request body for embedding classification.
///
/// Exactly one of `vector` (a JSON float array) or `raw` (pasted text,
/// comma/whitespace separated) must be provided.
#[derive(Debug, Deserialize)]
pub struct EmbeddingRequest {
    pub vector: Option<Vec<f64>>,
    pub raw: Option<String>,
}

/// Classify a raw embedding vector.
///
/// The vector content does not influence the mock score; it is validated so
/// the dashboard can surface input mistakes, then handed to the scorer.
pub async fn predict_from_embedding(
    State(state): State<AppState>,
    Json(body): Json<EmbeddingRequest>,
) -> AppResult<impl IntoResponse> {
    let embedding = match (body.vector, body.raw) {
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "Provide either 'vector' or 'raw', not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(AppError::BadRequest(
                "Provide an embedding as 'vector' or 'raw'".to_string(),
            ))
        }
        (Some(vector), None) => {
            validate_embedding(&vector)?;
            vector
        }
        (None, Some(raw)) => parse_embedding(&raw)?,
    };

    let score = state.scorer.score_embedding(&embedding).await;
    let anomaly_flag = score.probability >= EMBEDDING_ANOMALY_THRESHOLD;

    tracing::debug!(
        dimension = embedding.len(),
        anomaly = anomaly_flag,
        "Scored embedding"
    );

    Ok(Json(DataResponse {
        data: PredictionResponse {
            label: if anomaly_flag { LABEL_ANOMALY } else { LABEL_NORMAL },
            probability: score.probability,
            confidence: score.confidence,
            triggered_factors: Vec::new(),
            anomaly_flag,
            model: ModelQualityMetrics::current(),
        },
    }))
}
