//! Text embedder with a once-only knowledge base cache
//!
//! [`TextEmbedder`] owns the embedding model and the reference embedding of
//! every knowledge base entry. Both are produced by a single initialization
//! that concurrent callers share: the first caller runs it, everyone else
//! awaits the same in-flight attempt, and the finished state is published
//! atomically. Nothing is visible until the whole catalog is embedded.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures::future::try_join_all;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use symdx_domain::entities::DiseaseRecord;
use symdx_domain::error::{Error, Result};
use symdx_domain::ports::providers::{
    EmbeddingModelLoader, EmbeddingProvider, KnowledgeBaseProvider,
};
use symdx_domain::value_objects::Embedding;

/// Default number of catalog texts sent to the provider per batch
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;

/// Everything produced by initialization
struct EmbedderState {
    provider: Arc<dyn EmbeddingProvider>,
    /// Catalog records in knowledge base order
    diseases: Vec<DiseaseRecord>,
    /// Reference embedding per disease id
    cache: HashMap<String, Embedding>,
}

/// Embedding model plus cached knowledge base embeddings
pub struct TextEmbedder {
    loader: Arc<dyn EmbeddingModelLoader>,
    knowledge_base: Arc<dyn KnowledgeBaseProvider>,
    batch_size: usize,
    state: OnceCell<EmbedderState>,
}

impl TextEmbedder {
    /// Create an embedder; nothing is loaded until [`Self::ensure_ready`]
    pub fn new(
        loader: Arc<dyn EmbeddingModelLoader>,
        knowledge_base: Arc<dyn KnowledgeBaseProvider>,
    ) -> Self {
        Self {
            loader,
            knowledge_base,
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
            state: OnceCell::new(),
        }
    }

    /// Set how many catalog texts are embedded per provider call
    ///
    /// Zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Load the model and embed the knowledge base, once
    ///
    /// Concurrent callers share a single in-flight initialization. After
    /// success this is a no-op. After failure nothing is cached and the next
    /// call starts a fresh attempt.
    pub async fn ensure_ready(&self) -> Result<()> {
        self.state.get_or_try_init(|| self.initialize()).await?;
        Ok(())
    }

    /// Whether initialization has completed
    pub fn is_ready(&self) -> bool {
        self.state.initialized()
    }

    /// Embed arbitrary text with the loaded model
    pub async fn embed(&self, text: &str) -> Result<Embedding> {
        let state = self.state()?;
        state.provider.embed(text).await
    }

    /// Catalog records paired with their cached embeddings, in catalog order
    pub fn candidates(&self) -> Result<impl Iterator<Item = (&DiseaseRecord, &Embedding)>> {
        let state = self.state()?;
        Ok(state
            .diseases
            .iter()
            .filter_map(move |disease| state.cache.get(&disease.id).map(|e| (disease, e))))
    }

    /// Cached embedding of one knowledge base entry
    pub fn cached_embedding(&self, id: &str) -> Result<Option<&Embedding>> {
        Ok(self.state()?.cache.get(id))
    }

    /// Number of knowledge base entries, 0 before initialization
    pub fn disease_count(&self) -> usize {
        self.state.get().map_or(0, |state| state.diseases.len())
    }

    /// Name of the model this embedder loads
    pub fn model_name(&self) -> &str {
        self.loader.model_name()
    }

    fn state(&self) -> Result<&EmbedderState> {
        self.state.get().ok_or(Error::NotInitialized)
    }

    async fn initialize(&self) -> Result<EmbedderState> {
        let started = Instant::now();
        info!(model = self.loader.model_name(), "Loading embedding model");

        let provider = self
            .loader
            .load()
            .await
            .map_err(|e| as_initialization("embedding model failed to load", e))?;

        let diseases = self
            .knowledge_base
            .load_diseases()
            .await
            .map_err(|e| as_initialization("knowledge base failed to load", e))?;
        info!(
            provider = self.knowledge_base.provider_name(),
            diseases = diseases.len(),
            "Knowledge base loaded"
        );

        let cache = embed_catalog(provider.as_ref(), &diseases, self.batch_size)
            .await
            .map_err(|e| as_initialization("knowledge base embedding failed", e))?;

        info!(
            diseases = cache.len(),
            dimensions = provider.dimensions(),
            elapsed_ms = started.elapsed().as_millis(),
            "Disease embeddings computed"
        );

        Ok(EmbedderState {
            provider,
            diseases,
            cache,
        })
    }
}

/// Embed every symptom text and key the vectors by disease id
///
/// Batches run concurrently; the map is only returned once all of them
/// succeeded.
async fn embed_catalog(
    provider: &dyn EmbeddingProvider,
    diseases: &[DiseaseRecord],
    batch_size: usize,
) -> Result<HashMap<String, Embedding>> {
    let batches = diseases.chunks(batch_size).map(|chunk| async move {
        let texts: Vec<String> = chunk.iter().map(|d| d.symptom_text.clone()).collect();
        let embeddings = provider.embed_batch(&texts).await?;
        if embeddings.len() != chunk.len() {
            return Err(Error::embedding(format!(
                "provider returned {} embeddings for {} texts",
                embeddings.len(),
                chunk.len()
            )));
        }
        debug!(batch = chunk.len(), "Embedded knowledge base batch");
        Ok::<_, Error>(chunk.iter().zip(embeddings).collect::<Vec<_>>())
    });

    let mut cache = HashMap::with_capacity(diseases.len());
    for (disease, embedding) in try_join_all(batches).await?.into_iter().flatten() {
        if cache.insert(disease.id.clone(), embedding).is_some() {
            return Err(Error::knowledge_base(format!(
                "duplicate disease id '{}'",
                disease.id
            )));
        }
    }
    Ok(cache)
}

/// Wrap a load failure as an initialization error, keeping existing ones
fn as_initialization(context: &str, err: Error) -> Error {
    if err.is_initialization() {
        err
    } else {
        Error::initialization_with_source(format!("{context}: {err}"), err)
    }
}
