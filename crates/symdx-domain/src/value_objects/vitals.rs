//! Vital-sign value objects

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: Vital-Sign Readings
///
/// Every reading is optional. `None` means "not measured" and is never
/// treated as zero by the alert rules.
///
/// Serialized with camelCase keys (`bpSystolic`, `bpDiastolic`) to match
/// the form payloads the matcher is called with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalsInput {
    /// Body temperature in °F
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Systolic blood pressure in mmHg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_systolic: Option<f64>,
    /// Diastolic blood pressure in mmHg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_diastolic: Option<f64>,
    /// Peripheral oxygen saturation in %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<f64>,
    /// Heart rate in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<f64>,
}

impl VitalsInput {
    /// Create an empty set of readings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the temperature (°F)
    pub fn with_temperature(mut self, value: f64) -> Self {
        self.temperature = Some(value);
        self
    }

    /// Set the systolic blood pressure
    pub fn with_bp_systolic(mut self, value: f64) -> Self {
        self.bp_systolic = Some(value);
        self
    }

    /// Set the diastolic blood pressure
    pub fn with_bp_diastolic(mut self, value: f64) -> Self {
        self.bp_diastolic = Some(value);
        self
    }

    /// Set the oxygen saturation
    pub fn with_spo2(mut self, value: f64) -> Self {
        self.spo2 = Some(value);
        self
    }

    /// Set the pulse
    pub fn with_pulse(mut self, value: f64) -> Self {
        self.pulse = Some(value);
        self
    }

    /// Whether no reading was provided at all
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.bp_systolic.is_none()
            && self.bp_diastolic.is_none()
            && self.spo2.is_none()
            && self.pulse.is_none()
    }
}

/// Value Object: Raw Vital-Sign Form Fields
///
/// The text a health worker typed into the vitals form, before parsing.
/// Blank fields mean "not measured".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VitalsForm {
    /// Temperature field
    pub temperature: String,
    /// Systolic blood pressure field
    pub bp_systolic: String,
    /// Diastolic blood pressure field
    pub bp_diastolic: String,
    /// Oxygen saturation field
    pub spo2: String,
    /// Pulse field
    pub pulse: String,
}

impl VitalsInput {
    /// Parse raw form strings into readings
    ///
    /// Blank fields become `None`; anything else must be a finite number.
    pub fn from_form(form: &VitalsForm) -> Result<Self> {
        Self::try_from(form)
    }
}

impl TryFrom<&VitalsForm> for VitalsInput {
    type Error = Error;

    fn try_from(form: &VitalsForm) -> Result<Self> {
        Ok(Self {
            temperature: parse_reading("temperature", &form.temperature)?,
            bp_systolic: parse_reading("bpSystolic", &form.bp_systolic)?,
            bp_diastolic: parse_reading("bpDiastolic", &form.bp_diastolic)?,
            spo2: parse_reading("spo2", &form.spo2)?,
            pulse: parse_reading("pulse", &form.pulse)?,
        })
    }
}

/// Parse one form field; blank becomes `None`
fn parse_reading(field: &str, raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::invalid_input(format!("{field} is not a number: '{trimmed}'")))?;
    if !value.is_finite() {
        return Err(Error::invalid_input(format!(
            "{field} must be a finite number: '{trimmed}'"
        )));
    }
    Ok(Some(value))
}
