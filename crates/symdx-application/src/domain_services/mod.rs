//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`embedder`] | Model lifecycle and knowledge base embedding cache |
//! | [`ranker`] | Cosine similarity ranking and confidence mapping |
//! | [`vital_rules`] | Vital-sign red-flag threshold rules |

pub mod embedder;
pub mod ranker;
pub mod vital_rules;

pub use embedder::{DEFAULT_EMBEDDING_BATCH_SIZE, TextEmbedder};
pub use ranker::{RankedDisease, confidence_from_similarity, cosine_similarity, rank};
pub use vital_rules::evaluate_vitals;
