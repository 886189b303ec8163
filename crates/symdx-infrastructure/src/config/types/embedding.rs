//! Embedding configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use symdx_application::domain_services::DEFAULT_EMBEDDING_BATCH_SIZE;
use symdx_application::ports::registry::EmbeddingProviderConfig;

use crate::constants::{DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_PROVIDER};

/// Embedding model settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Registered provider name ("fastembed", "hashing")
    pub provider: String,
    /// Model identifier understood by the provider
    pub model: Option<String>,
    /// Directory for downloaded model files
    pub cache_dir: Option<PathBuf>,
    /// Show a progress bar while downloading model files
    pub show_download_progress: bool,
    /// Output dimensionality, for providers that allow choosing it
    pub dimensions: Option<usize>,
    /// Knowledge base texts embedded per provider call
    pub batch_size: usize,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: Some(DEFAULT_EMBEDDING_MODEL.to_string()),
            cache_dir: None,
            show_download_progress: true,
            dimensions: None,
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }
}

impl EmbeddingSettings {
    /// Registry config for resolving the provider
    pub fn to_provider_config(&self) -> EmbeddingProviderConfig {
        let mut config = EmbeddingProviderConfig::new(&self.provider)
            .with_download_progress(self.show_download_progress);
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(cache_dir) = &self.cache_dir {
            config = config.with_cache_dir(cache_dir);
        }
        if let Some(dimensions) = self.dimensions {
            config = config.with_dimensions(dimensions);
        }
        config
    }
}
