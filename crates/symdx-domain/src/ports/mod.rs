//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! High-level code (the application layer) depends on these traits; the
//! providers crate implements them.
//!
//! ## Organization
//!
//! - **providers/** - External provider ports (embedding models, disease catalogs)

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{EmbeddingModelLoader, EmbeddingProvider, KnowledgeBaseProvider};
