//! Monitoring factor types and the anomaly rule evaluator.
//!
//! Provides the `MonitoringFactors` input record, per-rule threshold
//! constants, and the pure `evaluate_factors` function that produces the
//! ordered list of triggered rule labels. The thresholds and labels are
//! the authoritative business rules for the dashboard and must not drift.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rule thresholds
// ---------------------------------------------------------------------------

/// Route deviation above this magnitude is anomalous (strict).
pub const DEVIATION_SCORE_LIMIT: f64 = 200.0;
/// Inactivity longer than this many minutes is anomalous (strict).
pub const INACTIVITY_LIMIT_MINUTES: f64 = 30.0;
/// Inactivity paired with a silent signal is anomalous past this (strict).
pub const SILENT_INACTIVITY_LIMIT_MINUTES: f64 = 20.0;
/// Altitude change below this (a drop) is anomalous (strict).
pub const ALTITUDE_DROP_LIMIT_METERS: f64 = -15.0;
/// Heart rate below this is anomalous (strict).
pub const HEART_RATE_LOW_BPM: f64 = 45.0;
/// Heart rate above this is anomalous (strict).
pub const HEART_RATE_HIGH_BPM: f64 = 150.0;
/// Oxygen saturation below this percentage is anomalous (strict).
pub const OXYGEN_SATURATION_LOW_PCT: f64 = 90.0;
/// Body temperature above this is anomalous (strict).
pub const BODY_TEMPERATURE_HIGH_C: f64 = 38.5;

// ---------------------------------------------------------------------------
// Trigger labels
// ---------------------------------------------------------------------------

pub const FACTOR_ROUTE_DEVIATION: &str = "Route deviation";
pub const FACTOR_PROLONGED_INACTIVITY: &str = "Prolonged inactivity";
pub const FACTOR_SILENT_BEHAVIOR: &str = "Silent behavior";
pub const FACTOR_MISSING_SIGNAL: &str = "Missing signal";
pub const FACTOR_DISTRESS_SIGNAL: &str = "Distress signal";
pub const FACTOR_ALTITUDE_DROP: &str = "Sudden altitude drop";
pub const FACTOR_HEART_RATE: &str = "Heart rate anomaly";
pub const FACTOR_OXYGEN: &str = "Oxygen anomaly";
pub const FACTOR_TEMPERATURE: &str = "Temperature anomaly";
pub const FACTOR_FALL_DETECTED: &str = "Fall detected";

// ---------------------------------------------------------------------------
// Signal status
// ---------------------------------------------------------------------------

/// Communication state reported by the tracked device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    /// Device is checking in normally.
    #[default]
    Normal,
    /// Device is reachable but has gone quiet.
    Silent,
    /// No signal received at all.
    Missing,
    /// Device sent an explicit distress beacon.
    Distress,
}

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// One snapshot of monitoring factors for a tracked subject.
///
/// Every field defaults to a "safe" reading, so API clients may submit only
/// the factors they collected. Out-of-range values are accepted as-is and
/// simply compared against the rule thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringFactors {
    /// Route deviation magnitude.
    pub deviation_score: f64,
    /// Minutes since last observed activity.
    pub inactivity_minutes: f64,
    /// Communication state of the device.
    pub signal_status: SignalStatus,
    /// Signed altitude change in meters (negative = drop).
    pub altitude_change_meters: f64,
    /// Heart rate in beats per minute.
    pub heart_rate_bpm: f64,
    /// Blood oxygen saturation percentage.
    pub oxygen_saturation_pct: f64,
    /// Body temperature in degrees Celsius.
    pub body_temperature_c: f64,
    /// Whether the device's fall sensor fired.
    pub fall_detected: bool,
}

impl Default for MonitoringFactors {
    fn default() -> Self {
        Self {
            deviation_score: 0.0,
            inactivity_minutes: 0.0,
            signal_status: SignalStatus::Normal,
            altitude_change_meters: 0.0,
            heart_rate_bpm: 70.0,
            oxygen_saturation_pct: 98.0,
            body_temperature_c: 36.5,
            fall_detected: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation result
// ---------------------------------------------------------------------------

/// Outcome of evaluating one factor snapshot against all rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    /// Labels of the rules that fired, in rule order.
    pub triggered_factors: Vec<&'static str>,
    /// True iff at least one rule fired.
    pub anomaly_flag: bool,
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Evaluate a factor snapshot against the ten monitoring rules.
///
/// Pure and deterministic: no I/O, no randomness, no shared state. Each rule
/// is checked independently; a rule contributes its label once if its
/// predicate holds. All numeric comparisons are strict, so a reading exactly
/// at a threshold does NOT trigger the rule.
pub fn evaluate_factors(factors: &MonitoringFactors) -> EvaluationResult {
    let mut triggered = Vec::new();

    if factors.deviation_score > DEVIATION_SCORE_LIMIT {
        triggered.push(FACTOR_ROUTE_DEVIATION);
    }
    if factors.inactivity_minutes > INACTIVITY_LIMIT_MINUTES {
        triggered.push(FACTOR_PROLONGED_INACTIVITY);
    }
    if factors.signal_status == SignalStatus::Silent
        && factors.inactivity_minutes > SILENT_INACTIVITY_LIMIT_MINUTES
    {
        triggered.push(FACTOR_SILENT_BEHAVIOR);
    }
    if factors.signal_status == SignalStatus::Missing {
        triggered.push(FACTOR_MISSING_SIGNAL);
    }
    if factors.signal_status == SignalStatus::Distress {
        triggered.push(FACTOR_DISTRESS_SIGNAL);
    }
    if factors.altitude_change_meters < ALTITUDE_DROP_LIMIT_METERS {
        triggered.push(FACTOR_ALTITUDE_DROP);
    }
    if factors.heart_rate_bpm < HEART_RATE_LOW_BPM || factors.heart_rate_bpm > HEART_RATE_HIGH_BPM
    {
        triggered.push(FACTOR_HEART_RATE);
    }
    if factors.oxygen_saturation_pct < OXYGEN_SATURATION_LOW_PCT {
        triggered.push(FACTOR_OXYGEN);
    }
    if factors.body_temperature_c > BODY_TEMPERATURE_HIGH_C {
        triggered.push(FACTOR_TEMPERATURE);
    }
    if factors.fall_detected {
        triggered.push(FACTOR_FALL_DETECTED);
    }

    let anomaly_flag = !triggered.is_empty();
    EvaluationResult {
        triggered_factors: triggered,
        anomaly_flag,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
