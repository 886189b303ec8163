//! Provider Registry
//!
//! Auto-registration system for plugin providers using linkme distributed
//! slices. Provider crates submit entries at link time; the infrastructure
//! layer resolves them by the name found in configuration.

/// Embedding provider registry
pub mod embedding;
/// Knowledge base provider registry
pub mod knowledge_base;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    find_embedding_provider, list_embedding_providers, resolve_embedding_provider,
};
pub use knowledge_base::{
    KNOWLEDGE_BASE_PROVIDERS, KnowledgeBaseProviderConfig, KnowledgeBaseProviderEntry,
    list_knowledge_base_providers, resolve_knowledge_base_provider,
};
