//! Static model-quality metrics shown on the dashboard.
//!
//! The dashboard displays accuracy/precision/recall for the (not yet
//! integrated) classifier. Until a real model ships these are fixed display
//! values with no contractual meaning beyond lying in `[0, 1]`.

use serde::Serialize;

/// Display accuracy of the mock classifier.
pub const MODEL_ACCURACY: f64 = 0.94;
/// Display precision of the mock classifier.
pub const MODEL_PRECISION: f64 = 0.92;
/// Display recall of the mock classifier.
pub const MODEL_RECALL: f64 = 0.90;

/// Snapshot of model-quality metrics, as served to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelQualityMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
}

impl ModelQualityMetrics {
    /// The current (static) metric snapshot.
    pub fn current() -> Self {
        Self {
            accuracy: MODEL_ACCURACY,
            precision: MODEL_PRECISION,
            recall: MODEL_RECALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_are_unit_range() {
        let m = ModelQualityMetrics::current();
        for value in [m.accuracy, m.precision, m.recall] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
