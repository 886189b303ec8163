//! Application Service Port Interfaces
//!
//! Contracts that application services implement and that host
//! applications (form handlers, batch jobs) consume.

use async_trait::async_trait;
use symdx_domain::error::Result;
use symdx_domain::value_objects::{DiagnosisReport, VitalsInput};

// ============================================================================
// Diagnosis Service Interface
// ============================================================================

/// Symptom-to-Diagnosis Service Interface
///
/// Single entry point of the matcher: free-text symptoms plus vital signs
/// in, ranked differential diagnosis plus red-flag alerts out.
#[async_trait]
pub trait DiagnosisServiceInterface: Send + Sync {
    /// Load the embedding model and embed the knowledge base if not done yet
    ///
    /// Safe to call concurrently and repeatedly; only the first call does
    /// any work.
    async fn ensure_ready(&self) -> Result<()>;

    /// Whether initialization has completed
    fn is_ready(&self) -> bool;

    /// Rank the knowledge base against `symptoms` and evaluate `vitals`
    async fn perform_diagnosis(
        &self,
        symptoms: &str,
        vitals: &VitalsInput,
    ) -> Result<DiagnosisReport>;
}
