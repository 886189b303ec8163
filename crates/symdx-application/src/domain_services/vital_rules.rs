//! Vital-sign red-flag rules
//!
//! Deterministic threshold checks over a [`VitalsInput`]. Each rule is
//! evaluated independently and alerts are emitted in rule order, so the
//! same readings always produce the same alert sequence. Absent readings
//! never fire.

use symdx_domain::constants::{
    FEVER_CRITICAL_F, PULSE_HIGH_MAX, PULSE_HIGH_MIN, SPO2_CRITICAL_MIN, SYSTOLIC_CRITICAL_MIN,
    SYSTOLIC_HIGH_MAX,
};
use symdx_domain::value_objects::{RedFlagAlert, Severity, VitalsInput};

/// A single threshold rule
type VitalRule = fn(&VitalsInput) -> Option<RedFlagAlert>;

/// Rules in evaluation (and output) order
const RULES: [VitalRule; 5] = [
    high_fever,
    low_oxygen_saturation,
    hypotension,
    hypertensive_crisis,
    abnormal_heart_rate,
];

/// Evaluate every rule against `vitals`
pub fn evaluate_vitals(vitals: &VitalsInput) -> Vec<RedFlagAlert> {
    RULES.iter().filter_map(|rule| rule(vitals)).collect()
}

fn high_fever(vitals: &VitalsInput) -> Option<RedFlagAlert> {
    vitals
        .temperature
        .filter(|t| *t > FEVER_CRITICAL_F)
        .map(|_| {
            RedFlagAlert::new(
                "High Fever",
                Severity::Critical,
                "Temperature >103°F - Start cooling measures, check for sepsis, consider blood cultures",
            )
        })
}

fn low_oxygen_saturation(vitals: &VitalsInput) -> Option<RedFlagAlert> {
    vitals.spo2.filter(|s| *s < SPO2_CRITICAL_MIN).map(|_| {
        RedFlagAlert::new(
            "Low Oxygen Saturation",
            Severity::Critical,
            "SpO2 <90% - START OXYGEN IMMEDIATELY. Monitor continuously. Prepare for referral.",
        )
    })
}

fn hypotension(vitals: &VitalsInput) -> Option<RedFlagAlert> {
    vitals
        .bp_systolic
        .filter(|s| *s < SYSTOLIC_CRITICAL_MIN)
        .map(|_| {
            RedFlagAlert::new(
                "Hypotension",
                Severity::Critical,
                "Low BP - Check for shock. Start IV fluids. Monitor urine output. Consider sepsis.",
            )
        })
}

fn hypertensive_crisis(vitals: &VitalsInput) -> Option<RedFlagAlert> {
    vitals
        .bp_systolic
        .filter(|s| *s > SYSTOLIC_HIGH_MAX)
        .map(|_| {
            RedFlagAlert::new(
                "Hypertensive Crisis",
                Severity::High,
                "Very high BP - Risk of stroke/MI. Antihypertensive needed. Refer urgently.",
            )
        })
}

fn abnormal_heart_rate(vitals: &VitalsInput) -> Option<RedFlagAlert> {
    let pulse = vitals.pulse?;
    let condition = if pulse > PULSE_HIGH_MAX {
        "Tachycardia"
    } else if pulse < PULSE_HIGH_MIN {
        "Bradycardia"
    } else {
        return None;
    };
    Some(RedFlagAlert::new(
        condition,
        Severity::High,
        format!(
            "Abnormal heart rate ({pulse} bpm) - Check for cardiac issues, dehydration, or medication effects"
        ),
    ))
}
