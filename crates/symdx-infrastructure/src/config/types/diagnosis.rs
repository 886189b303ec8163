//! Diagnosis output configuration

use serde::{Deserialize, Serialize};
use symdx_domain::constants::DIAGNOSIS_TOP_K;

/// Diagnosis settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiagnosisSettings {
    /// Number of ranked diagnoses returned per request
    pub top_k: usize,
}

impl Default for DiagnosisSettings {
    fn default() -> Self {
        Self {
            top_k: DIAGNOSIS_TOP_K,
        }
    }
}
