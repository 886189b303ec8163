//! Knowledge base read from a JSON file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use symdx_application::ports::registry::{
    KNOWLEDGE_BASE_PROVIDERS, KnowledgeBaseProviderConfig, KnowledgeBaseProviderEntry,
};
use symdx_domain::entities::DiseaseRecord;
use symdx_domain::error::{Error, Result};
use symdx_domain::ports::providers::KnowledgeBaseProvider;

use crate::knowledge_base::catalog::parse_catalog;

/// JSON file knowledge base provider
///
/// Reads the catalog from disk on each load. The file holds a JSON array
/// of disease records.
#[derive(Debug, Clone)]
pub struct JsonFileKnowledgeBase {
    path: PathBuf,
}

impl JsonFileKnowledgeBase {
    /// Create a provider reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KnowledgeBaseProvider for JsonFileKnowledgeBase {
    async fn load_diseases(&self) -> Result<Vec<DiseaseRecord>> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to read disease catalog {}", self.path.display()),
                e,
            )
        })?;
        parse_catalog(&json)
    }

    fn provider_name(&self) -> &str {
        "file"
    }
}

fn file_factory(
    config: &KnowledgeBaseProviderConfig,
) -> std::result::Result<Arc<dyn KnowledgeBaseProvider>, String> {
    let path = config
        .path
        .clone()
        .ok_or_else(|| "The 'file' knowledge base requires a path".to_string())?;
    Ok(Arc::new(JsonFileKnowledgeBase::new(path)))
}

#[linkme::distributed_slice(KNOWLEDGE_BASE_PROVIDERS)]
static FILE_PROVIDER: KnowledgeBaseProviderEntry = KnowledgeBaseProviderEntry {
    name: "file",
    description: "Disease catalog read from a JSON file",
    factory: file_factory,
};
