//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings used to compare
//! symptom descriptions.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic meaning.
/// Providers return unit-length vectors (except for the all-zero vector), but
/// consumers must not rely on it when computing similarity.
///
/// ## Example
///
/// ```rust
/// use symdx_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.6, 0.8], "all-minilm-l6-v2");
/// assert_eq!(embedding.dimensions, 2);
/// assert!(embedding.is_unit_length(1e-6));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving `dimensions` from the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Euclidean (L2) norm of the vector
    pub fn norm(&self) -> f32 {
        self.vector.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Whether the vector has unit length within `tolerance`
    pub fn is_unit_length(&self, tolerance: f32) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }
}
