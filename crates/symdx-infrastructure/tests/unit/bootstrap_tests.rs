//! Bootstrap wiring tests
//!
//! Use the offline hashing provider so no model is downloaded.

use std::sync::Arc;

use async_trait::async_trait;
use symdx_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use symdx_application::ports::{EmbeddingModelLoader, EmbeddingProvider};
use symdx_domain::error::{Error, Result};
use symdx_domain::value_objects::{Embedding, Severity, VitalsInput};
use symdx_infrastructure::bootstrap::{RegistryModelLoader, build_diagnosis_service};
use symdx_infrastructure::config::{AppConfig, ConfigBuilder};
use tempfile::TempDir;

/// Resolves fine but cannot embed anything
struct UnhealthyProvider;

#[async_trait]
impl EmbeddingProvider for UnhealthyProvider {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
        Err(Error::embedding("inference session is gone"))
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn provider_name(&self) -> &str {
        "unhealthy"
    }
}

fn unhealthy_factory(
    _config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    Ok(Arc::new(UnhealthyProvider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static UNHEALTHY_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "unhealthy",
    description: "Test provider whose embeddings always fail",
    default_model: None,
    factory: unhealthy_factory,
};

fn hashing_config() -> AppConfig {
    ConfigBuilder::new().with_embedding_provider("hashing").build()
}

#[tokio::test]
async fn test_build_is_lazy() {
    // The default FastEmbed provider is never loaded because nothing asks
    let service = build_diagnosis_service(&AppConfig::default()).unwrap();
    assert!(!service.is_ready());
}

#[tokio::test]
async fn test_bundled_catalog_with_hashing_provider() {
    let service = build_diagnosis_service(&hashing_config()).unwrap();
    service.ensure_ready().await.unwrap();
    assert!(service.is_ready());

    let report = service
        .perform_diagnosis(
            "sudden profuse painless rice water diarrhea, vomiting, leg cramps, rapid severe dehydration, extreme thirst",
            &VitalsInput::new().with_temperature(104.0),
        )
        .await
        .unwrap();

    assert_eq!(report.diagnoses.len(), 3);
    assert_eq!(report.diagnoses[0].id, "cholera");
    assert_eq!(report.diagnoses[0].confidence, 100);
    assert_eq!(report.red_flags.len(), 1);
    assert_eq!(report.highest_severity(), Some(Severity::Critical));
    assert!(report.requires_urgent_action());
}

#[tokio::test]
async fn test_file_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diseases.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "flu", "name": "Influenza", "symptom_text": "fever cough body aches",
             "red_flags": [], "triage": "Rest and fluids", "medications": ["Paracetamol"],
             "contraindications": []},
            {"id": "scabies", "name": "Scabies", "symptom_text": "intense itching worse at night",
             "red_flags": [], "triage": "Treat household contacts", "medications": ["Permethrin"],
             "contraindications": []}
        ]"#,
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_embedding_provider("hashing")
        .with_knowledge_base_file(&path)
        .build();
    let service = build_diagnosis_service(&config).unwrap();

    let report = service
        .perform_diagnosis("itching at night", &VitalsInput::new())
        .await
        .unwrap();
    assert_eq!(report.diagnoses.len(), 2);
    assert_eq!(report.diagnoses[0].id, "scabies");
}

#[tokio::test]
async fn test_missing_catalog_file_is_initialization_error() {
    let config = ConfigBuilder::new()
        .with_embedding_provider("hashing")
        .with_knowledge_base_file("/nonexistent/diseases.json")
        .build();
    let service = build_diagnosis_service(&config).unwrap();

    let err = service.ensure_ready().await.unwrap_err();
    assert!(err.is_initialization());
    assert!(!service.is_ready());
}

#[test]
fn test_unknown_providers_rejected() {
    let config = ConfigBuilder::new().with_embedding_provider("word2vec").build();
    let err = build_diagnosis_service(&config).err().unwrap();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("word2vec"));

    let mut config = hashing_config();
    config.knowledge_base.provider = "postgres".to_string();
    let err = build_diagnosis_service(&config).err().unwrap();
    assert!(err.to_string().contains("postgres"));
}

#[test]
fn test_invalid_settings_rejected_before_wiring() {
    let config = ConfigBuilder::new()
        .with_embedding_provider("hashing")
        .with_top_k(0)
        .build();
    let err = build_diagnosis_service(&config).err().unwrap();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("top_k"));

    let mut config = hashing_config();
    config.embedding.batch_size = 0;
    let err = build_diagnosis_service(&config).err().unwrap();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_loader_model_name_follows_provider() {
    // The default settings name a FastEmbed model; hashing has none
    let hashing = hashing_config().embedding.to_provider_config();
    assert!(hashing.model.is_some());
    assert_eq!(RegistryModelLoader::new(hashing).model_name(), "hashing");

    let fastembed = AppConfig::default().embedding.to_provider_config();
    assert_eq!(
        RegistryModelLoader::new(fastembed).model_name(),
        "AllMiniLML6V2"
    );

    let bge = EmbeddingProviderConfig::new("fastembed").with_model("bge-small-en");
    assert_eq!(RegistryModelLoader::new(bge).model_name(), "bge-small-en");

    let fastembed_default = EmbeddingProviderConfig::new("fastembed");
    assert_eq!(
        RegistryModelLoader::new(fastembed_default).model_name(),
        "AllMiniLML6V2"
    );
}

#[tokio::test]
async fn test_loader_runs_health_check() {
    let loader = RegistryModelLoader::new(EmbeddingProviderConfig::new("hashing"));
    let provider = loader.load().await.unwrap();
    assert_eq!(provider.provider_name(), "hashing");

    let loader = RegistryModelLoader::new(EmbeddingProviderConfig::new("unhealthy"));
    let err = loader.load().await.err().unwrap();
    assert!(err.is_initialization());
    assert!(err.to_string().contains("health check"));
}

#[tokio::test]
async fn test_unhealthy_provider_keeps_service_unready() {
    let service = build_diagnosis_service(
        &ConfigBuilder::new().with_embedding_provider("unhealthy").build(),
    )
    .unwrap();
    let err = service.ensure_ready().await.unwrap_err();
    assert!(err.is_initialization());
    assert!(!service.is_ready());
}

#[tokio::test]
async fn test_top_k_from_config() {
    let config = ConfigBuilder::new()
        .with_embedding_provider("hashing")
        .with_top_k(5)
        .build();
    let service = build_diagnosis_service(&config).unwrap();
    let report = service
        .perform_diagnosis("fever", &VitalsInput::new())
        .await
        .unwrap();
    assert_eq!(report.diagnoses.len(), 5);
}
