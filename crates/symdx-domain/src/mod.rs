//! # symdx Domain Layer
//!
//! Core types for the symptom-to-diagnosis matcher. This crate has no
//! knowledge of embedding runtimes, file formats on disk or configuration;
//! it only defines what a disease, a vital-sign reading and a diagnosis
//! are, plus the ports that outer layers implement.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Knowledge base records with identity |
//! | [`value_objects`] | Embeddings, vitals, diagnosis results and alerts |
//! | [`ports`] | Provider traits (embedding, knowledge base) |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Clinical thresholds and ranking limits |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use entities::DiseaseRecord;
pub use error::{Error, Result};
pub use value_objects::{
    DiagnosisReport, DiagnosisResult, Embedding, RedFlagAlert, Severity, VitalsInput,
};
