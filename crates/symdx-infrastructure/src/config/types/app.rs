//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{DiagnosisSettings, EmbeddingSettings, KnowledgeBaseSettings, LoggingConfig};

/// Main application configuration
///
/// Every section falls back to its defaults, so a TOML file only needs the
/// keys it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Embedding model configuration
    pub embedding: EmbeddingSettings,
    /// Disease catalog source
    pub knowledge_base: KnowledgeBaseSettings,
    /// Diagnosis output configuration
    pub diagnosis: DiagnosisSettings,
}
