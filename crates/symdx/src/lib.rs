//! # symdx
//!
//! Symptom-to-diagnosis matching for primary-care settings.
//!
//! A free-text symptom description is embedded with a sentence-embedding
//! model and compared by cosine similarity against a fixed disease
//! knowledge base, giving a ranked differential diagnosis. Vital-sign
//! readings are checked against threshold rules that raise red-flag alerts
//! independently of the ranking.
//!
//! ## Example
//!
//! ```ignore
//! use symdx::infrastructure::{ConfigLoader, build_diagnosis_service};
//! use symdx::VitalsInput;
//!
//! let config = ConfigLoader::new().load()?;
//! let service = build_diagnosis_service(&config)?;
//!
//! let report = service
//!     .perform_diagnosis("fever with chills and sweating", &VitalsInput::new().with_spo2(88.0))
//!     .await?;
//! for diagnosis in &report.diagnoses {
//!     println!("{} ({}%)", diagnosis.name, diagnosis.confidence);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, errors and provider ports
//! - `application` - Embedder, ranker, vital-sign rules, diagnosis use case
//! - `infrastructure` - Configuration, logging and service bootstrap
//! - `providers` - Embedding models and knowledge base sources

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use symdx_domain::*;
}

/// Application layer - domain services and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use symdx_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use symdx_infrastructure::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use symdx_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the service entry points at the crate root
pub use application::ports::DiagnosisServiceInterface;
pub use infrastructure::{AppConfig, ConfigLoader, build_diagnosis_service, init_logging};
