//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values, using Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use symdx_domain::error::{Error, Result};

use crate::config::{
    AppConfig, DiagnosisSettings, EmbeddingSettings, KnowledgeBaseSettings, LoggingConfig,
};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first one found)
    /// 3. Environment variables with prefix, nested keys split on `__`
    ///    (e.g. `SYMDX_EMBEDDING__PROVIDER=hashing`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing config file among the conventional locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_embedding_config(&config.embedding)?;
    validate_knowledge_base_config(&config.knowledge_base)?;
    validate_diagnosis_config(config.diagnosis)?;
    Ok(())
}

fn validate_embedding_config(embedding: &EmbeddingSettings) -> Result<()> {
    if embedding.provider.trim().is_empty() {
        return Err(Error::configuration("Embedding provider cannot be empty"));
    }
    if embedding.batch_size == 0 {
        return Err(Error::configuration("Embedding batch size cannot be 0"));
    }
    if embedding.dimensions == Some(0) {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_knowledge_base_config(knowledge_base: &KnowledgeBaseSettings) -> Result<()> {
    if knowledge_base.provider.trim().is_empty() {
        return Err(Error::configuration("Knowledge base provider cannot be empty"));
    }
    if knowledge_base.provider == "file" && knowledge_base.path.is_none() {
        return Err(Error::configuration(
            "Knowledge base path is required when the provider is 'file'",
        ));
    }
    Ok(())
}

fn validate_diagnosis_config(diagnosis: DiagnosisSettings) -> Result<()> {
    if diagnosis.top_k == 0 {
        return Err(Error::configuration("Diagnosis top_k cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set embedding configuration
    pub fn with_embedding(mut self, embedding: EmbeddingSettings) -> Self {
        self.config.embedding = embedding;
        self
    }

    /// Select an embedding provider, keeping the other embedding settings
    pub fn with_embedding_provider(mut self, provider: impl Into<String>) -> Self {
        self.config.embedding.provider = provider.into();
        self
    }

    /// Set knowledge base configuration
    pub fn with_knowledge_base(mut self, knowledge_base: KnowledgeBaseSettings) -> Self {
        self.config.knowledge_base = knowledge_base;
        self
    }

    /// Read the disease catalog from a JSON file
    pub fn with_knowledge_base_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.knowledge_base = KnowledgeBaseSettings {
            provider: "file".to_string(),
            path: Some(path.into()),
        };
        self
    }

    /// Set the number of diagnoses returned per request
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.config.diagnosis.top_k = top_k;
        self
    }

    /// Build the configuration without validating it
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn try_build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
