//! Knowledge base held in memory
//!
//! For embedding the matcher in hosts that already hold the catalog, and
//! for tests. Not registered by name since it needs records up front.

use async_trait::async_trait;

use symdx_domain::entities::DiseaseRecord;
use symdx_domain::error::Result;
use symdx_domain::ports::providers::KnowledgeBaseProvider;

use crate::knowledge_base::catalog::validate_catalog;

/// In-memory knowledge base provider
#[derive(Debug, Clone, Default)]
pub struct InMemoryKnowledgeBase {
    diseases: Vec<DiseaseRecord>,
}

impl InMemoryKnowledgeBase {
    /// Create a provider serving `diseases` in the given order
    pub fn new(diseases: Vec<DiseaseRecord>) -> Self {
        Self { diseases }
    }
}

#[async_trait]
impl KnowledgeBaseProvider for InMemoryKnowledgeBase {
    async fn load_diseases(&self) -> Result<Vec<DiseaseRecord>> {
        validate_catalog(&self.diseases)?;
        Ok(self.diseases.clone())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
