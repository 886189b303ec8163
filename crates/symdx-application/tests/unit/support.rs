//! Shared test doubles
//!
//! Counting wrappers around the real hashing provider so tests can assert
//! how often the model was loaded and the catalog embedded.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use symdx_application::ports::{EmbeddingModelLoader, EmbeddingProvider};
use symdx_domain::entities::DiseaseRecord;
use symdx_domain::error::{Error, Result};
use symdx_domain::value_objects::Embedding;
use symdx_providers::embedding::HashingEmbeddingProvider;

pub fn disease(id: &str, symptom_text: &str) -> DiseaseRecord {
    DiseaseRecord {
        id: id.to_string(),
        name: id.to_uppercase(),
        symptom_text: symptom_text.to_string(),
        red_flags: vec![format!("{id} warning")],
        triage: format!("{id} triage"),
        medications: vec![format!("{id} medication")],
        contraindications: vec![],
    }
}

pub fn catalog() -> Vec<DiseaseRecord> {
    vec![
        disease("malaria", "cyclic fever with chills and sweating"),
        disease("pneumonia", "cough with sputum and shortness of breath"),
        disease("gastroenteritis", "watery diarrhea vomiting and stomach cramps"),
        disease("uti", "burning pain while urinating and frequent urination"),
        disease("dermatitis", "itchy red rash on the skin"),
    ]
}

/// Hashing provider that counts batch calls and texts
pub struct CountingProvider {
    inner: HashingEmbeddingProvider,
    pub batch_calls: AtomicUsize,
    pub texts_embedded: AtomicUsize,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self {
            inner: HashingEmbeddingProvider::new(),
            batch_calls: AtomicUsize::new(0),
            texts_embedded: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for CountingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.texts_embedded.fetch_add(texts.len(), Ordering::SeqCst);
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Loader that counts loads and can be told to fail the first N attempts
pub struct CountingLoader {
    pub provider: Arc<CountingProvider>,
    pub loads: AtomicUsize,
    failures_left: AtomicUsize,
    delay: Duration,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(CountingProvider::new()),
            loads: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn failing_first(failures: usize) -> Self {
        let loader = Self::new();
        loader.failures_left.store(failures, Ordering::SeqCst);
        loader
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn texts_embedded(&self) -> usize {
        self.provider.texts_embedded.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingModelLoader for CountingLoader {
    async fn load(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let should_fail = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(Error::initialization("model download failed"));
        }
        let provider: Arc<dyn EmbeddingProvider> = self.provider.clone();
        Ok(provider)
    }

    fn model_name(&self) -> &str {
        "counting-hashing"
    }
}
