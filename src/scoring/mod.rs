//! Cosine scoring and threshold decisions.
//!
//! The math shared by both strategies lives in [`cosine_similarity`] and
//! [`decide`]; [`SimilarityScorer`] exposes the two strategy entry points.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::{ScorerConfig, SimilarityScorer};
pub use types::{Strategy, Verdict};

/// Cosine similarity between two vectors.
///
/// Length-mismatched, empty, or zero-norm inputs score 0.0 instead of
/// producing a division failure.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a.iter().zip(b.iter()).fold(
        (0.0f32, 0.0f32, 0.0f32),
        |(dot, na, nb), (&av, &bv)| (dot + av * bv, na + av * av, nb + bv * bv),
    );

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Applies the decision rule: similar iff `score >= threshold`.
///
/// The boundary is inclusive; a score exactly at the threshold counts as
/// similar.
#[inline]
pub fn decide(score: f32, threshold: f32) -> Verdict {
    if score >= threshold {
        Verdict::Similar { score }
    } else {
        Verdict::NotSimilar { score }
    }
}
