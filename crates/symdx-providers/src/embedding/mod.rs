//! Embedding Provider Implementations
//!
//! Converts symptom text into dense vector embeddings.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | HashingEmbeddingProvider | Offline / Testing | Complete |
//! | FastEmbedProvider | Local ML | Complete (optional) |
//!
//! ## Provider Selection Guide
//!
//! - **FastEmbed**: Sentence-transformer inference via ONNX (requires `embedding-fastembed` feature)
//! - **Hashing**: Deterministic lexical embeddings for tests and air-gapped installs

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod hashing;
pub mod helpers;

// Re-export for convenience
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use hashing::HashingEmbeddingProvider;
pub use helpers::l2_normalize;
