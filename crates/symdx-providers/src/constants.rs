//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in symdx-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// FastEmbed default model dimension (all-MiniLM-L6-v2)
pub const EMBEDDING_DIMENSION_FASTEMBED_DEFAULT: usize = 384;

/// Hashing embedding provider dimension
pub const EMBEDDING_DIMENSION_HASHING: usize = 384;

/// Model name reported by the hashing provider
pub const HASHING_MODEL_NAME: &str = "feature-hashing-sha256";

/// Capacity of the FastEmbed actor request channel
pub const FASTEMBED_CHANNEL_CAPACITY: usize = 100;

/// Default FastEmbed model name
pub const FASTEMBED_DEFAULT_MODEL: &str = "AllMiniLML6V2";
