//! Configuration types module

pub mod app;
pub mod diagnosis;
pub mod embedding;
pub mod knowledge_base;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use diagnosis::DiagnosisSettings;
pub use embedding::EmbeddingSettings;
pub use knowledge_base::KnowledgeBaseSettings;
pub use logging::LoggingConfig;
