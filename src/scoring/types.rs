use serde::Serialize;

/// Scoring strategy, selected explicitly by the caller.
///
/// The two strategies are independent pipelines; their vectors are never
/// comparable across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Sparse TF-IDF over the two input documents.
    Lexical,
    /// Dense sentence-embedding vectors.
    Embedding,
}

/// Outcome of a similarity decision, carrying the underlying score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Score reached the threshold.
    Similar {
        /// Cosine similarity that produced the decision.
        score: f32,
    },
    /// Score fell short of the threshold.
    NotSimilar {
        /// Cosine similarity that produced the decision.
        score: f32,
    },
}

impl Verdict {
    /// Returns `true` if the pair was judged similar.
    pub fn is_similar(&self) -> bool {
        matches!(self, Verdict::Similar { .. })
    }

    /// Returns the underlying cosine similarity.
    pub fn score(&self) -> f32 {
        match self {
            Verdict::Similar { score } | Verdict::NotSimilar { score } => *score,
        }
    }

    /// Coarse categorical label: `"yes"` when similar, `"no"` otherwise.
    pub fn label(&self) -> &'static str {
        if self.is_similar() { "yes" } else { "no" }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Similar { score } => write!(f, "SIMILAR (score: {score:.4})"),
            Verdict::NotSimilar { score } => write!(f, "NOT_SIMILAR (score: {score:.4})"),
        }
    }
}
