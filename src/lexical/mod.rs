//! Two-document TF-IDF vectorization.
//!
//! The corpus is exactly the two input documents. This is a deliberate
//! constraint of the lexical strategy, not a general-purpose ranking
//! vectorizer: document frequency can only be 1 or 2, and the vocabulary
//! is rebuilt for every pair.


use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

/// Number of documents in the corpus. Fixed by construction.
const CORPUS_SIZE: usize = 2;

/// TF-IDF vectors for one pair of normalized documents.
///
/// Both vectors share the same vocabulary ordering, so they are directly
/// comparable with [`cosine_similarity`](crate::scoring::cosine_similarity).
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfPair {
    /// Weighted, L2-normalized vector for the first document.
    pub vector_a: Vec<f32>,
    /// Weighted, L2-normalized vector for the second document.
    pub vector_b: Vec<f32>,
    /// Vocabulary in vector order (sorted union of both documents' terms).
    pub vocabulary: Vec<String>,
}

impl TfidfPair {
    /// Builds TF-IDF vectors over the two-document corpus.
    ///
    /// Inputs are expected to be normalized already (see
    /// [`normalize`](crate::normalize::normalize)); terms are whatever
    /// `split_whitespace` yields. Returns `None` when the combined
    /// vocabulary is empty, i.e. neither document contains a single term.
    pub fn build(text_a: &str, text_b: &str) -> Option<Self> {
        let counts_a = term_counts(text_a);
        let counts_b = term_counts(text_b);

        let vocabulary: Vec<&str> = counts_a
            .keys()
            .chain(counts_b.keys())
            .copied()
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            debug!("combined vocabulary is empty, nothing to vectorize");
            return None;
        }

        let mut vector_a = Vec::with_capacity(vocabulary.len());
        let mut vector_b = Vec::with_capacity(vocabulary.len());

        for term in &vocabulary {
            let tf_a = counts_a.get(term).copied().unwrap_or(0);
            let tf_b = counts_b.get(term).copied().unwrap_or(0);
            let df = usize::from(tf_a > 0) + usize::from(tf_b > 0);
            let idf = inverse_document_frequency(df);

            vector_a.push(tf_a as f32 * idf);
            vector_b.push(tf_b as f32 * idf);
        }

        l2_normalize(&mut vector_a);
        l2_normalize(&mut vector_b);

        debug!(
            vocabulary_size = vocabulary.len(),
            "built tf-idf vectors for document pair"
        );

        Some(Self {
            vector_a,
            vector_b,
            vocabulary: vocabulary.into_iter().map(str::to_owned).collect(),
        })
    }

    /// Vocabulary size, which is also the dimensionality of both vectors.
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }
}

fn term_counts(text: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Smoothed idf over the two-document corpus: `ln((1 + n) / (1 + df)) + 1`.
///
/// With `n = 2`: terms in both documents weigh 1.0, terms in a single
/// document weigh `ln(1.5) + 1`.
fn inverse_document_frequency(df: usize) -> f32 {
    (((1 + CORPUS_SIZE) as f32) / ((1 + df) as f32)).ln() + 1.0
}

fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector {
            *v /= norm;
        }
    }
}
