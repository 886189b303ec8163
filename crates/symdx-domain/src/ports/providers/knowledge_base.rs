use async_trait::async_trait;

use crate::entities::DiseaseRecord;
use crate::error::Result;

/// Disease Catalog Interface
///
/// Supplies the ordered, read-only list of candidate diseases. A malformed
/// catalog fails the whole load; providers never drop individual entries.
#[async_trait]
pub trait KnowledgeBaseProvider: Send + Sync {
    /// Load every disease record, in catalog order
    async fn load_diseases(&self) -> Result<Vec<DiseaseRecord>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
