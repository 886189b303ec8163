//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces (diagnosis)

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, KnowledgeBaseProviderConfig,
    KnowledgeBaseProviderEntry, find_embedding_provider, list_embedding_providers,
    list_knowledge_base_providers, resolve_embedding_provider, resolve_knowledge_base_provider,
};
pub use services::DiagnosisServiceInterface;
pub use symdx_domain::ports::providers::{
    EmbeddingModelLoader, EmbeddingProvider, KnowledgeBaseProvider,
};
