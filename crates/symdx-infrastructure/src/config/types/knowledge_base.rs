//! Knowledge base configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use symdx_application::ports::registry::KnowledgeBaseProviderConfig;

use crate::constants::DEFAULT_KNOWLEDGE_BASE_PROVIDER;

/// Disease catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KnowledgeBaseSettings {
    /// Registered provider name ("bundled", "file")
    pub provider: String,
    /// Catalog path, required by the "file" provider
    pub path: Option<PathBuf>,
}

impl Default for KnowledgeBaseSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_KNOWLEDGE_BASE_PROVIDER.to_string(),
            path: None,
        }
    }
}

impl KnowledgeBaseSettings {
    /// Registry config for resolving the provider
    pub fn to_provider_config(&self) -> KnowledgeBaseProviderConfig {
        let config = KnowledgeBaseProviderConfig::new(&self.provider);
        match &self.path {
            Some(path) => config.with_path(path),
            None => config,
        }
    }
}
