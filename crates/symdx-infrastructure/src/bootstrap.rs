//! Service bootstrap
//!
//! Wires configuration to the provider registries and returns a diagnosis
//! service. Nothing is loaded here: the model download and catalog
//! embedding happen on the first `ensure_ready` or diagnosis call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use symdx_application::domain_services::TextEmbedder;
use symdx_application::ports::registry::{
    EmbeddingProviderConfig, find_embedding_provider, list_embedding_providers,
    resolve_embedding_provider, resolve_knowledge_base_provider,
};
use symdx_application::ports::{DiagnosisServiceInterface, EmbeddingModelLoader, EmbeddingProvider};
use symdx_application::use_cases::DiagnosisServiceImpl;
use symdx_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;

/// Model loader backed by the embedding provider registry
///
/// Provider factories may download model files and build an inference
/// session, so resolution runs on the blocking thread pool. A resolved
/// provider must pass its health check before it is handed out.
#[derive(Debug, Clone)]
pub struct RegistryModelLoader {
    config: EmbeddingProviderConfig,
    model_name: String,
}

impl RegistryModelLoader {
    /// Create a loader for the given provider config
    ///
    /// Providers without models (or not registered) are named by provider.
    pub fn new(config: EmbeddingProviderConfig) -> Self {
        let model_name = match find_embedding_provider(&config.provider)
            .and_then(|entry| entry.default_model)
        {
            Some(default) => config.model.as_deref().unwrap_or(default).to_string(),
            None => config.provider.clone(),
        };
        Self { config, model_name }
    }
}

#[async_trait]
impl EmbeddingModelLoader for RegistryModelLoader {
    async fn load(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        let config = self.config.clone();
        let provider = tokio::task::spawn_blocking(move || resolve_embedding_provider(&config))
            .await
            .map_err(|e| Error::initialization_with_source("Embedding model loader panicked", e))?
            .map_err(Error::initialization)?;

        provider.health_check().await.map_err(|e| {
            Error::initialization_with_source(
                format!("Embedding provider '{}' failed its health check", self.config.provider),
                e,
            )
        })?;

        info!(
            provider = provider.provider_name(),
            dimensions = provider.dimensions(),
            "Embedding provider ready"
        );
        Ok(provider)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Build a diagnosis service from configuration
///
/// Fails with a configuration error when the settings are invalid, a
/// provider name is not registered, or the knowledge base provider rejects
/// its settings.
pub fn build_diagnosis_service(config: &AppConfig) -> Result<Arc<dyn DiagnosisServiceInterface>> {
    validate_app_config(config)?;

    let embedding = config.embedding.to_provider_config();
    if find_embedding_provider(&embedding.provider).is_none() {
        let available: Vec<&str> = list_embedding_providers()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        return Err(Error::configuration(format!(
            "Unknown embedding provider '{}'. Available providers: {available:?}",
            embedding.provider
        )));
    }

    let knowledge_base =
        resolve_knowledge_base_provider(&config.knowledge_base.to_provider_config())
            .map_err(Error::configuration)?;

    debug!(
        embedding = %embedding.provider,
        knowledge_base = knowledge_base.provider_name(),
        top_k = config.diagnosis.top_k,
        "Building diagnosis service"
    );

    let loader = Arc::new(RegistryModelLoader::new(embedding));
    let embedder =
        TextEmbedder::new(loader, knowledge_base).with_batch_size(config.embedding.batch_size);

    Ok(Arc::new(
        DiagnosisServiceImpl::new(Arc::new(embedder)).with_top_k(config.diagnosis.top_k),
    ))
}
