//! # symdx - Provider Implementations
//!
//! This crate contains all user-selectable provider implementations following
//! Clean Architecture principles. Each provider implements a port (trait)
//! defined in `symdx-domain` and registers itself in the `symdx-application`
//! registry.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | FastEmbed, Hashing |
//! | Knowledge Base | `KnowledgeBaseProvider` | Bundled, JsonFile, InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! symdx-providers = { version = "0.1", features = ["embedding-fastembed"] }
//! ```

// Re-export symdx-domain types commonly used with providers
pub use symdx_domain::error::{Error, Result};
pub use symdx_domain::ports::providers::{EmbeddingProvider, KnowledgeBaseProvider};

/// Provider-specific constants
pub mod constants;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for local embedding models.
pub mod embedding;

/// Knowledge base provider implementations
///
/// Implements `KnowledgeBaseProvider` for bundled and file-backed catalogs.
pub mod knowledge_base;
