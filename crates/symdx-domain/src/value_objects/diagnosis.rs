//! Diagnosis output value objects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::DiseaseRecord;

/// Alert severity, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Needs attention during this visit
    Moderate,
    /// Needs prompt treatment or urgent referral
    High,
    /// Life-threatening; act immediately
    Critical,
}

impl Severity {
    /// Lowercase label, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Red-Flag Alert
///
/// Produced from vital signs for a single request. Not derived from the
/// knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagAlert {
    /// Clinical condition name (e.g. "Hypotension")
    pub condition: String,
    /// How urgent the condition is
    pub severity: Severity,
    /// Instruction for the health worker
    pub action: String,
}

impl RedFlagAlert {
    /// Create a new alert
    pub fn new(
        condition: impl Into<String>,
        severity: Severity,
        action: impl Into<String>,
    ) -> Self {
        Self {
            condition: condition.into(),
            severity,
            action: action.into(),
        }
    }
}

/// Value Object: Ranked Diagnosis
///
/// A disease from the knowledge base together with how closely it matched
/// the reported symptoms. Static fields are copied from the record verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// Knowledge base identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Match confidence, an integer in `[0, 100]`
    pub confidence: u8,
    /// Disease-level warning signs
    pub red_flags: Vec<String>,
    /// Triage instruction
    pub triage: String,
    /// Suggested medications
    pub medications: Vec<String>,
    /// Medication and treatment warnings
    pub contraindications: Vec<String>,
}

impl DiagnosisResult {
    /// Build a result from a knowledge base record and a confidence score
    pub fn from_record(record: &DiseaseRecord, confidence: u8) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            confidence,
            red_flags: record.red_flags.clone(),
            triage: record.triage.clone(),
            medications: record.medications.clone(),
            contraindications: record.contraindications.clone(),
        }
    }
}

/// Value Object: Diagnosis Report
///
/// Combined output of one diagnosis request: the ranked differential and
/// any vital-sign alerts, each in their own deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    /// Best matching diseases, most similar first
    pub diagnoses: Vec<DiagnosisResult>,
    /// Alerts raised by vital signs, in rule order
    pub red_flags: Vec<RedFlagAlert>,
}

impl DiagnosisReport {
    /// Most severe alert level in the report, if any alert fired
    pub fn highest_severity(&self) -> Option<Severity> {
        self.red_flags.iter().map(|alert| alert.severity).max()
    }

    /// Whether any critical alert fired
    pub fn requires_urgent_action(&self) -> bool {
        self.highest_severity() == Some(Severity::Critical)
    }

    /// Top-ranked diagnosis, if the knowledge base was not empty
    pub fn primary(&self) -> Option<&DiagnosisResult> {
        self.diagnoses.first()
    }
}
