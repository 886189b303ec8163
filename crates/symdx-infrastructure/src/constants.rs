//! Infrastructure layer constants
//!
//! Domain thresholds live in `symdx_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "symdx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "symdx";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SYMDX";

/// Separator between nested keys in environment variables
/// (e.g. `SYMDX_EMBEDDING__BATCH_SIZE`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "SYMDX_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix of rolled log files when the configured path has no stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "symdx";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";

/// Default embedding model
pub const DEFAULT_EMBEDDING_MODEL: &str = "AllMiniLML6V2";

/// Default knowledge base provider
pub const DEFAULT_KNOWLEDGE_BASE_PROVIDER: &str = "bundled";
