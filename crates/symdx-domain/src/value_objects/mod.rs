//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic matching |
//! | [`VitalsInput`] | Optional vital-sign readings for one encounter |
//! | [`VitalsForm`] | Raw vital-sign form fields before parsing |
//! | [`DiagnosisResult`] | One ranked candidate diagnosis |
//! | [`RedFlagAlert`] | Vital-sign alert with severity and action |
//! | [`DiagnosisReport`] | Combined output of a diagnosis request |

/// Diagnosis output value objects
pub mod diagnosis;
/// Semantic embedding value objects
pub mod embedding;
/// Vital-sign value objects
pub mod vitals;

// Re-export commonly used value objects
pub use diagnosis::{DiagnosisReport, DiagnosisResult, RedFlagAlert, Severity};
pub use embedding::Embedding;
pub use vitals::{VitalsForm, VitalsInput};
