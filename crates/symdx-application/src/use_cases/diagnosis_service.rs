//! Diagnosis Service Use Case
//!
//! Orchestrates the embedder, the similarity ranker and the vital-sign rules
//! into one diagnosis report. Persists nothing; storing the report is the
//! caller's job.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use symdx_domain::constants::DIAGNOSIS_TOP_K;
use symdx_domain::error::Result;
use symdx_domain::value_objects::{DiagnosisReport, VitalsInput};

use crate::domain_services::embedder::TextEmbedder;
use crate::domain_services::ranker::rank;
use crate::domain_services::vital_rules::evaluate_vitals;
use crate::ports::services::DiagnosisServiceInterface;

/// Diagnosis service implementation
pub struct DiagnosisServiceImpl {
    embedder: Arc<TextEmbedder>,
    top_k: usize,
}

impl DiagnosisServiceImpl {
    /// Create a diagnosis service returning the default number of diagnoses
    pub fn new(embedder: Arc<TextEmbedder>) -> Self {
        Self {
            embedder,
            top_k: DIAGNOSIS_TOP_K,
        }
    }

    /// Set how many diagnoses are returned per request
    ///
    /// Zero is treated as one.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// The embedder backing this service
    pub fn embedder(&self) -> &Arc<TextEmbedder> {
        &self.embedder
    }
}

#[async_trait]
impl DiagnosisServiceInterface for DiagnosisServiceImpl {
    async fn ensure_ready(&self) -> Result<()> {
        self.embedder.ensure_ready().await
    }

    fn is_ready(&self) -> bool {
        self.embedder.is_ready()
    }

    async fn perform_diagnosis(
        &self,
        symptoms: &str,
        vitals: &VitalsInput,
    ) -> Result<DiagnosisReport> {
        self.embedder.ensure_ready().await?;

        let query = self.embedder.embed(symptoms).await?;
        let diagnoses: Vec<_> = rank(&query.vector, self.embedder.candidates()?, self.top_k)
            .iter()
            .map(|ranked| ranked.to_result())
            .collect();

        let red_flags = evaluate_vitals(vitals);

        debug!(
            top_match = diagnoses.first().map(|d| d.id.as_str()),
            confidence = diagnoses.first().map(|d| d.confidence),
            candidates = self.embedder.disease_count(),
            "Diagnosis ranked"
        );
        for alert in &red_flags {
            warn!(
                condition = %alert.condition,
                severity = %alert.severity,
                "Vital-sign red flag"
            );
        }

        Ok(DiagnosisReport {
            diagnoses,
            red_flags,
        })
    }
}
