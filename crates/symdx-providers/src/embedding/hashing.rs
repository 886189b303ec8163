//! Hashing embedding provider
//!
//! Deterministic lexical embeddings without a model download. Each word is
//! hashed to one signed dimension, the per-word vectors are mean-pooled and
//! the result is L2-normalized. Texts sharing words score high under cosine
//! similarity; identical texts score exactly the same vector.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use unicode_segmentation::UnicodeSegmentation;

use symdx_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use symdx_domain::error::Result;
use symdx_domain::ports::providers::EmbeddingProvider;
use symdx_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_HASHING, HASHING_MODEL_NAME};
use crate::embedding::helpers::l2_normalize;

/// Feature-hashing embedding provider
///
/// # Example
///
/// ```rust
/// use symdx_providers::embedding::HashingEmbeddingProvider;
/// use symdx_domain::ports::providers::EmbeddingProvider;
///
/// let provider = HashingEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "hashing");
/// ```
#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl HashingEmbeddingProvider {
    /// Create a provider with the default dimensionality
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_HASHING)
    }

    /// Create a provider with a custom dimensionality (at least 1)
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Embed one text synchronously
    #[allow(clippy::cast_precision_loss)]
    pub fn embed_text(&self, text: &str) -> Embedding {
        let mut vector = vec![0.0_f32; self.dimensions];
        let mut tokens = 0_usize;

        for word in text.unicode_words() {
            let (index, sign) = self.bucket(&word.to_lowercase());
            vector[index] += sign;
            tokens += 1;
        }

        // Mean pooling over token vectors
        if tokens > 0 {
            let count = tokens as f32;
            for value in &mut vector {
                *value /= count;
            }
        }
        l2_normalize(&mut vector);

        Embedding::new(vector, HASHING_MODEL_NAME)
    }

    /// Map a token to a dimension index and a sign
    #[allow(clippy::cast_possible_truncation)]
    fn bucket(&self, token: &str) -> (usize, f32) {
        let digest = Sha256::digest(token.as_bytes());
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        let hash = u64::from_le_bytes(bytes);

        let index = (hash % self.dimensions as u64) as usize;
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "hashing"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating hashing provider instances.
fn hashing_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let provider = config
        .dimensions
        .map_or_else(HashingEmbeddingProvider::new, |dimensions| {
            HashingEmbeddingProvider::with_dimensions(dimensions)
        });
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static HASHING_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "hashing",
    description: "Deterministic feature-hashing embeddings (offline, no model download)",
    default_model: None,
    factory: hashing_factory,
};
