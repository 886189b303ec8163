//! Similarity ranking
//!
//! Scores knowledge base entries against a query embedding with cosine
//! similarity and keeps the best matches. Pure functions over borrowed data;
//! nothing here touches shared state.

use std::cmp::Ordering;

use symdx_domain::constants::{CONFIDENCE_MAX, CONFIDENCE_MIN};
use symdx_domain::entities::DiseaseRecord;
use symdx_domain::value_objects::{DiagnosisResult, Embedding};

/// A knowledge base entry paired with its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDisease<'a> {
    /// The matched record
    pub disease: &'a DiseaseRecord,
    /// Cosine similarity to the query, in `[-1, 1]`
    pub similarity: f32,
}

impl RankedDisease<'_> {
    /// Similarity mapped to an integer percentage
    pub fn confidence(&self) -> u8 {
        confidence_from_similarity(self.similarity)
    }

    /// Convert into a diagnosis result, copying the record's static fields
    pub fn to_result(&self) -> DiagnosisResult {
        DiagnosisResult::from_record(self.disease, self.confidence())
    }
}

/// Rank `candidates` by cosine similarity to `query`, most similar first
///
/// Ties keep candidate order, so results are deterministic for a fixed
/// catalog. At most `limit` entries are returned.
pub fn rank<'a, I>(query: &[f32], candidates: I, limit: usize) -> Vec<RankedDisease<'a>>
where
    I: IntoIterator<Item = (&'a DiseaseRecord, &'a Embedding)>,
{
    // Precompute query norm once (avoids redundant calculation per vector)
    let query_norm = compute_norm(query);

    let mut scored: Vec<RankedDisease<'a>> = candidates
        .into_iter()
        .map(|(disease, embedding)| RankedDisease {
            disease,
            similarity: cosine_similarity_with_norm(query, &embedding.vector, query_norm),
        })
        .collect();

    // sort_by is stable: equal scores stay in catalog order
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}

/// Cosine similarity between two vectors
///
/// Returns 0.0 for zero-norm vectors, mismatched lengths and non-finite
/// results instead of dividing by zero or propagating NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_similarity_with_norm(a, b, compute_norm(a))
}

/// Map a similarity score to a confidence percentage
///
/// Rounds `similarity * 100` to the nearest integer, then clamps to
/// `[0, 100]`. NaN maps to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence_from_similarity(similarity: f32) -> u8 {
    if similarity.is_nan() {
        return CONFIDENCE_MIN;
    }
    let rounded = (f64::from(similarity) * 100.0).round();
    rounded.clamp(f64::from(CONFIDENCE_MIN), f64::from(CONFIDENCE_MAX)) as u8
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed norm for `a`
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let similarity = dot_product / (norm_a * norm_b);
    if similarity.is_finite() { similarity } else { 0.0 }
}
