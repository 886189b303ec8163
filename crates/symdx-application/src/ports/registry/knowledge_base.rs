//! Knowledge Base Provider Registry
//!
//! Same linkme mechanism as the embedding registry, for disease catalog
//! sources.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::KnowledgeBaseProvider;

/// Configuration for knowledge base provider creation
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseProviderConfig {
    /// Provider name (e.g., "bundled", "file")
    pub provider: String,
    /// Path to a catalog file, for file-backed providers
    pub path: Option<PathBuf>,
}

impl KnowledgeBaseProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the catalog path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Registry entry for knowledge base providers
pub struct KnowledgeBaseProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory:
        fn(&KnowledgeBaseProviderConfig) -> Result<Arc<dyn KnowledgeBaseProvider>, String>,
}

#[linkme::distributed_slice]
pub static KNOWLEDGE_BASE_PROVIDERS: [KnowledgeBaseProviderEntry] = [..];

/// Resolve knowledge base provider by name from registry
pub fn resolve_knowledge_base_provider(
    config: &KnowledgeBaseProviderConfig,
) -> Result<Arc<dyn KnowledgeBaseProvider>, String> {
    let provider_name = &config.provider;

    for entry in KNOWLEDGE_BASE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = KNOWLEDGE_BASE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown knowledge base provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered knowledge base providers as (name, description) tuples
pub fn list_knowledge_base_providers() -> Vec<(&'static str, &'static str)> {
    KNOWLEDGE_BASE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
