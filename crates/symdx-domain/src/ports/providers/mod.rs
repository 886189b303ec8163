//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text embedding generation |
//! | [`EmbeddingModelLoader`] | Acquisition of a pretrained embedding model |
//! | [`KnowledgeBaseProvider`] | Source of the static disease catalog |

/// Embedding provider port
pub mod embedding;
/// Knowledge base provider port
pub mod knowledge_base;

pub use embedding::{EmbeddingModelLoader, EmbeddingProvider};
pub use knowledge_base::KnowledgeBaseProvider;
