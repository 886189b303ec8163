//! Use Cases
//!
//! Application services implementing the service ports.

pub mod diagnosis_service;

pub use diagnosis_service::DiagnosisServiceImpl;
