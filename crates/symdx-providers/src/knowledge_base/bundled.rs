//! Knowledge base compiled into the binary

use std::sync::Arc;

use async_trait::async_trait;

use symdx_application::ports::registry::{
    KNOWLEDGE_BASE_PROVIDERS, KnowledgeBaseProviderConfig, KnowledgeBaseProviderEntry,
};
use symdx_domain::entities::DiseaseRecord;
use symdx_domain::error::Result;
use symdx_domain::ports::providers::KnowledgeBaseProvider;

use crate::knowledge_base::catalog::parse_catalog;

/// Disease catalog shipped with the crate
const BUNDLED_CATALOG: &str = include_str!("../../data/diseases.json");

/// Bundled knowledge base provider
///
/// Serves the primary-care catalog embedded at build time. Parsing happens
/// on every load, so a broken catalog surfaces as a load error rather than
/// a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledKnowledgeBase;

impl BundledKnowledgeBase {
    /// Create a new bundled knowledge base provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KnowledgeBaseProvider for BundledKnowledgeBase {
    async fn load_diseases(&self) -> Result<Vec<DiseaseRecord>> {
        parse_catalog(BUNDLED_CATALOG)
    }

    fn provider_name(&self) -> &str {
        "bundled"
    }
}

fn bundled_factory(
    _config: &KnowledgeBaseProviderConfig,
) -> std::result::Result<Arc<dyn KnowledgeBaseProvider>, String> {
    Ok(Arc::new(BundledKnowledgeBase::new()))
}

#[linkme::distributed_slice(KNOWLEDGE_BASE_PROVIDERS)]
static BUNDLED_PROVIDER: KnowledgeBaseProviderEntry = KnowledgeBaseProviderEntry {
    name: "bundled",
    description: "Primary-care disease catalog bundled with the binary",
    factory: bundled_factory,
};
