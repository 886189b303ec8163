//! Domain layer constants
//!
//! Clinical thresholds used by the vital-sign rules and limits used by the
//! similarity ranking. Thresholds are strict: a reading equal to the
//! threshold does not trigger an alert.

// ============================================================================
// RANKING CONSTANTS
// ============================================================================

/// Number of diagnoses returned per request
pub const DIAGNOSIS_TOP_K: usize = 3;

/// Lowest confidence a diagnosis can carry
pub const CONFIDENCE_MIN: u8 = 0;

/// Highest confidence a diagnosis can carry
pub const CONFIDENCE_MAX: u8 = 100;

// ============================================================================
// VITAL SIGN THRESHOLDS
// ============================================================================

/// Temperature above which a high fever alert fires (°F)
pub const FEVER_CRITICAL_F: f64 = 103.0;

/// Oxygen saturation below which a hypoxia alert fires (%)
pub const SPO2_CRITICAL_MIN: f64 = 90.0;

/// Systolic pressure below which a hypotension alert fires (mmHg)
pub const SYSTOLIC_CRITICAL_MIN: f64 = 90.0;

/// Systolic pressure above which a hypertensive crisis alert fires (mmHg)
pub const SYSTOLIC_HIGH_MAX: f64 = 180.0;

/// Pulse above which a tachycardia alert fires (bpm)
pub const PULSE_HIGH_MAX: f64 = 120.0;

/// Pulse below which a bradycardia alert fires (bpm)
pub const PULSE_HIGH_MIN: f64 = 50.0;
