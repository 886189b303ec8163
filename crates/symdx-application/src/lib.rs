//! Application Layer - symdx
//!
//! Implements the symptom-to-diagnosis use case on top of the domain ports.
//!
//! ## Architecture
//!
//! The application layer:
//! - Owns the embedding cache and its once-only initialization
//! - Ranks knowledge base entries by cosine similarity
//! - Evaluates vital-sign red-flag rules
//! - Orchestrates both into a single diagnosis report
//! - Has no dependencies on concrete providers or configuration formats
//!
//! ## Ports (Interfaces)
//!
//! - `ports::services::*`: Application service interfaces
//! - `ports::registry::*`: Auto-registration of provider implementations
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `symdx-domain`: For entities, value objects and provider ports
//! - Pure Rust libraries for async and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
