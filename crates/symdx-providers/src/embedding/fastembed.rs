//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for local
//! embedding generation. Uses ONNX sentence-transformer models (mean pooling)
//! without external API calls. Model files are downloaded to the fastembed
//! cache on first use.

use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use symdx_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use symdx_domain::error::{Error, Result};
use symdx_domain::ports::providers::EmbeddingProvider;
use symdx_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_FASTEMBED_DEFAULT, FASTEMBED_CHANNEL_CAPACITY, FASTEMBED_DEFAULT_MODEL,
};
use crate::embedding::helpers::l2_normalize;

/// Messages for the FastEmbed actor
enum FastEmbedMessage {
    EmbedBatch {
        texts: Vec<String>,
        tx: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// FastEmbed local embedding provider using Actor pattern
///
/// Uses the Actor pattern to eliminate locks and ensure thread-safe access
/// to the underlying ONNX model. The model is initialized once and processes
/// embedding requests through a channel.
///
/// Construction blocks while model files are downloaded and the ONNX session
/// is built; call it from a blocking context. It must run inside a Tokio
/// runtime because it spawns the actor task.
pub struct FastEmbedProvider {
    sender: mpsc::Sender<FastEmbedMessage>,
    dimensions: usize,
}

impl FastEmbedProvider {
    /// Create a new FastEmbed provider with the default model (AllMiniLML6V2)
    pub fn new() -> Result<Self> {
        Self::with_model(EmbeddingModel::AllMiniLML6V2)
    }

    /// Create a new FastEmbed provider with a specific model
    pub fn with_model(model: EmbeddingModel) -> Result<Self> {
        let dimensions = model_dimensions(&model);
        let init_options = InitOptions::new(model).with_show_download_progress(true);
        Self::with_options(init_options, dimensions)
    }

    /// Create a new FastEmbed provider with custom initialization options
    pub fn with_options(init_options: InitOptions, dimensions: usize) -> Result<Self> {
        let model_name = format!("{:?}", init_options.model_name);
        let text_embedding = TextEmbedding::try_new(init_options).map_err(|e| {
            Error::initialization(format!("Failed to initialize FastEmbed model: {e}"))
        })?;

        let (tx, rx) = mpsc::channel(FASTEMBED_CHANNEL_CAPACITY);
        let mut actor = FastEmbedActor::new(rx, text_embedding, model_name);
        tokio::spawn(async move {
            actor.run().await;
        });

        Ok(Self {
            sender: tx,
            dimensions,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(FastEmbedMessage::EmbedBatch {
                texts: texts.to_vec(),
                tx,
            })
            .await
            .map_err(|_| Error::embedding("FastEmbed actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::embedding("FastEmbed actor closed")))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

impl Clone for FastEmbedProvider {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            dimensions: self.dimensions,
        }
    }
}

/// Internal actor that processes embedding requests
struct FastEmbedActor {
    receiver: mpsc::Receiver<FastEmbedMessage>,
    model: TextEmbedding,
    model_name: String,
}

impl FastEmbedActor {
    fn new(
        receiver: mpsc::Receiver<FastEmbedMessage>,
        model: TextEmbedding,
        model_name: String,
    ) -> Self {
        Self {
            receiver,
            model,
            model_name,
        }
    }

    async fn run(&mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FastEmbedMessage::EmbedBatch { texts, tx } => {
                    let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
                    let embeddings_result = self.model.embed(text_refs, None);
                    let result = match embeddings_result {
                        Ok(vectors) => Ok(vectors
                            .into_iter()
                            .map(|mut vector| {
                                l2_normalize(&mut vector);
                                Embedding::new(vector, self.model_name.clone())
                            })
                            .collect()),
                        Err(e) => Err(Error::embedding(format!(
                            "FastEmbed embedding failed: {e}"
                        ))),
                    };
                    let _ = tx.send(result);
                }
            }
        }
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Parse model name string to EmbeddingModel enum
fn parse_embedding_model(model_name: &str) -> Option<EmbeddingModel> {
    match model_name.to_lowercase().as_str() {
        "allminilml6v2" | "all-minilm-l6-v2" => Some(EmbeddingModel::AllMiniLML6V2),
        "bgesmallenq" | "bge-small-en-q" => Some(EmbeddingModel::BGESmallENV15Q),
        "bgesmallen" | "bge-small-en" => Some(EmbeddingModel::BGESmallENV15),
        "bgesmallzh" | "bge-small-zh" => Some(EmbeddingModel::BGESmallZHV15),
        "bgebasenq" | "bge-base-en-q" => Some(EmbeddingModel::BGEBaseENV15Q),
        "bgebaseen" | "bge-base-en" => Some(EmbeddingModel::BGEBaseENV15),
        "bgelargeen" | "bge-large-en" => Some(EmbeddingModel::BGELargeENV15Q),
        "multilingual-e5-small" => Some(EmbeddingModel::MultilingualE5Small),
        "multilingual-e5-large" => Some(EmbeddingModel::MultilingualE5Large),
        _ => None,
    }
}

/// Output dimensionality of the supported models
fn model_dimensions(model: &EmbeddingModel) -> usize {
    match model {
        EmbeddingModel::BGESmallZHV15 => 512,
        EmbeddingModel::BGEBaseENV15 | EmbeddingModel::BGEBaseENV15Q => 768,
        EmbeddingModel::BGELargeENV15Q | EmbeddingModel::MultilingualE5Large => 1024,
        _ => EMBEDDING_DIMENSION_FASTEMBED_DEFAULT,
    }
}

/// Factory function for creating FastEmbed provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let model_name = config.model.as_deref().unwrap_or(FASTEMBED_DEFAULT_MODEL);
    let model = parse_embedding_model(model_name).unwrap_or_else(|| {
        warn!(
            model = model_name,
            fallback = FASTEMBED_DEFAULT_MODEL,
            "Unknown FastEmbed model, using default"
        );
        EmbeddingModel::AllMiniLML6V2
    });
    let dimensions = model_dimensions(&model);

    let mut init_options =
        InitOptions::new(model).with_show_download_progress(config.show_download_progress);
    if let Some(cache_dir) = &config.cache_dir {
        init_options = init_options.with_cache_dir(cache_dir.clone());
    }

    let provider = FastEmbedProvider::with_options(init_options, dimensions)
        .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local provider (AllMiniLML6V2, BGESmallEN, etc.)",
    default_model: Some(FASTEMBED_DEFAULT_MODEL),
    factory: fastembed_factory,
};
