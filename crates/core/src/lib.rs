//! Trailguard core domain logic.
//!
//! Pure types and functions shared by the API server: the anomaly rule
//! evaluator, embedding input validation, the scoring-strategy seam, and
//! static model-quality metrics. No I/O lives here.

pub mod embedding;
pub mod error;
pub mod model_metrics;
pub mod monitoring;
pub mod scoring;
