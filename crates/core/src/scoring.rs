//! Scoring strategy seam between the rule evaluator and a classifier.
//!
//! The rule evaluator in [`crate::monitoring`] is the only contractual
//! logic; the probability/confidence numbers on the dashboard come from a
//! [`Scorer`]. Today that is [`MockScorer`], which fabricates plausible
//! numbers and an artificial latency. A real model drops in behind the same
//! trait without touching the evaluator.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::monitoring::{evaluate_factors, MonitoringFactors};

/// Confidence floor reported by the mock scorer.
pub const MOCK_CONFIDENCE_MIN: f64 = 0.85;
/// Confidence ceiling reported by the mock scorer.
pub const MOCK_CONFIDENCE_MAX: f64 = 0.99;
/// Probability floor when the evaluator flagged an anomaly.
pub const MOCK_ANOMALY_PROBABILITY_MIN: f64 = 0.75;
/// Probability ceiling when the evaluator flagged an anomaly.
pub const MOCK_ANOMALY_PROBABILITY_MAX: f64 = 0.99;
/// Probability floor when the evaluator saw normal behavior.
pub const MOCK_NORMAL_PROBABILITY_MIN: f64 = 0.01;
/// Probability ceiling when the evaluator saw normal behavior.
pub const MOCK_NORMAL_PROBABILITY_MAX: f64 = 0.25;

/// A cosmetic anomaly probability and the scorer's confidence in it.
///
/// Both values are in `[0, 1]`. Neither carries contractual meaning for the
/// mock scorer; only range membership is guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionScore {
    pub probability: f64,
    pub confidence: f64,
}

/// Capability: given an input, produce an anomaly probability.
///
/// Object-safe so the API server can hold `Arc<dyn Scorer>` and swap
/// implementations via configuration.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Score a monitoring-factor snapshot.
    async fn score_factors(&self, factors: &MonitoringFactors) -> PredictionScore;

    /// Score a raw embedding vector.
    async fn score_embedding(&self, embedding: &[f64]) -> PredictionScore;
}

/// Stand-in scorer for the absent classifier.
///
/// Sleeps a random duration within the configured latency range (simulating
/// inference time), then fabricates a probability consistent with the rule
/// evaluator's verdict so the dashboard reads coherently.
#[derive(Debug, Clone)]
pub struct MockScorer {
    latency_min: Duration,
    latency_max: Duration,
}

impl MockScorer {
    /// Build a mock scorer with the given artificial latency range.
    ///
    /// If `min > max` the bounds are swapped rather than rejected, since
    /// latency is cosmetic.
    pub fn new(latency_min: Duration, latency_max: Duration) -> Self {
        if latency_min > latency_max {
            Self {
                latency_min: latency_max,
                latency_max: latency_min,
            }
        } else {
            Self {
                latency_min,
                latency_max,
            }
        }
    }

    /// A mock scorer with no artificial latency, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    async fn simulate_latency(&self) {
        if self.latency_max.is_zero() {
            return;
        }
        let min_ms = self.latency_min.as_millis() as u64;
        let max_ms = self.latency_max.as_millis() as u64;
        let delay_ms = rand::rng().random_range(min_ms..=max_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

impl Default for MockScorer {
    /// Defaults to the latency band the dashboard was tuned against.
    fn default() -> Self {
        Self::new(Duration::from_millis(400), Duration::from_millis(1200))
    }
}

#[async_trait]
impl Scorer for MockScorer {
    async fn score_factors(&self, factors: &MonitoringFactors) -> PredictionScore {
        self.simulate_latency().await;

        let anomaly = evaluate_factors(factors).anomaly_flag;
        let mut rng = rand::rng();
        let probability = if anomaly {
            rng.random_range(MOCK_ANOMALY_PROBABILITY_MIN..=MOCK_ANOMALY_PROBABILITY_MAX)
        } else {
            rng.random_range(MOCK_NORMAL_PROBABILITY_MIN..=MOCK_NORMAL_PROBABILITY_MAX)
        };

        PredictionScore {
            probability,
            confidence: rng.random_range(MOCK_CONFIDENCE_MIN..=MOCK_CONFIDENCE_MAX),
        }
    }

    async fn score_embedding(&self, _embedding: &[f64]) -> PredictionScore {
        self.simulate_latency().await;

        let mut rng = rand::rng();
        PredictionScore {
            probability: rng.random_range(0.0..=1.0),
            confidence: rng.random_range(MOCK_CONFIDENCE_MIN..=MOCK_CONFIDENCE_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::SignalStatus;

    #[tokio::test]
    async fn anomalous_factors_score_high() {
        let scorer = MockScorer::instant();
        let factors = MonitoringFactors {
            signal_status: SignalStatus::Distress,
            ..MonitoringFactors::default()
        };

        for _ in 0..20 {
            let score = scorer.score_factors(&factors).await;
            assert!(
                (MOCK_ANOMALY_PROBABILITY_MIN..=MOCK_ANOMALY_PROBABILITY_MAX)
                    .contains(&score.probability),
                "probability out of anomaly band: {}",
                score.probability
            );
            assert!(
                (MOCK_CONFIDENCE_MIN..=MOCK_CONFIDENCE_MAX).contains(&score.confidence)
            );
        }
    }

    #[tokio::test]
    async fn normal_factors_score_low() {
        let scorer = MockScorer::instant();
        let factors = MonitoringFactors::default();

        for _ in 0..20 {
            let score = scorer.score_factors(&factors).await;
            assert!(
                (MOCK_NORMAL_PROBABILITY_MIN..=MOCK_NORMAL_PROBABILITY_MAX)
                    .contains(&score.probability),
                "probability out of normal band: {}",
                score.probability
            );
        }
    }

    #[tokio::test]
    async fn embedding_scores_are_unit_range() {
        let scorer = MockScorer::instant();
        for _ in 0..20 {
            let score = scorer.score_embedding(&[0.1, 0.2, 0.3]).await;
            assert!((0.0..=1.0).contains(&score.probability));
            assert!((MOCK_CONFIDENCE_MIN..=MOCK_CONFIDENCE_MAX).contains(&score.confidence));
        }
    }

    #[test]
    fn swapped_latency_bounds_are_normalized() {
        let scorer = MockScorer::new(Duration::from_millis(500), Duration::from_millis(100));
        assert!(scorer.latency_min <= scorer.latency_max);
    }
}
