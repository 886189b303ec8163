use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Semantic Text Embedding Interface
///
/// Turns symptom descriptions into dense vectors such that semantically
/// similar descriptions produce vectors with high cosine similarity.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
///
/// # Example
///
/// ```ignore
/// let embedding = provider.embed("fever with chills and sweating").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, one per input and in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}

/// Embedding Model Acquisition Interface
///
/// Loading a pretrained model may download weights and build an inference
/// session, so it is kept separate from the provider itself and awaited
/// once during initialization.
#[async_trait]
pub trait EmbeddingModelLoader: Send + Sync {
    /// Load the model and return a ready provider
    async fn load(&self) -> Result<Arc<dyn EmbeddingProvider>>;

    /// Name of the model this loader acquires
    fn model_name(&self) -> &str;
}
