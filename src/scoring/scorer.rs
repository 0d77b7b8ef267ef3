use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::constants::{DEFAULT_EMBEDDING_THRESHOLD, DEFAULT_LEXICAL_THRESHOLD};
use crate::embedding::{EncoderConfig, TextEmbedder};
use crate::lexical::TfidfPair;
use crate::normalize::normalize;

use super::error::ScoringError;
use super::types::{Strategy, Verdict};
use super::{cosine_similarity, decide};

/// Per-strategy decision thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerConfig {
    /// Threshold for the embedding strategy.
    pub embedding_threshold: f32,
    /// Threshold for the lexical strategy.
    pub lexical_threshold: f32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            embedding_threshold: DEFAULT_EMBEDDING_THRESHOLD,
            lexical_threshold: DEFAULT_LEXICAL_THRESHOLD,
        }
    }
}

impl ScorerConfig {
    /// Validates that both thresholds lie in the cosine range.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for value in [self.embedding_threshold, self.lexical_threshold] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ScoringError::InvalidThreshold { value });
            }
        }
        Ok(())
    }
}

/// Pairwise similarity decisions over both strategies.
///
/// The embedder is loaded once and shared by reference; the scorer itself
/// is stateless per call and safe to use concurrently.
pub struct SimilarityScorer {
    embedder: Option<Arc<TextEmbedder>>,
    config: ScorerConfig,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("embedder", &self.embedder)
            .field("config", &self.config)
            .finish()
    }
}

impl SimilarityScorer {
    /// Creates a scorer over a loaded embedder with default thresholds.
    pub fn new(embedder: Arc<TextEmbedder>) -> Self {
        Self {
            embedder: Some(embedder),
            config: ScorerConfig::default(),
        }
    }

    /// Creates a scorer without an embedding model.
    ///
    /// The lexical strategy works as usual; the embedding strategy reports
    /// [`ScoringError::ModelNotConfigured`].
    pub fn lexical_only() -> Self {
        Self {
            embedder: None,
            config: ScorerConfig::default(),
        }
    }

    /// Wires up a scorer from crate configuration, performing the one-time
    /// model load when a model directory is configured.
    pub fn from_config(config: &Config) -> Result<Self, ScoringError> {
        let scorer_config = ScorerConfig {
            embedding_threshold: config.embedding_threshold,
            lexical_threshold: config.lexical_threshold,
        };
        scorer_config.validate()?;

        let embedder = match &config.model_dir {
            Some(dir) => Some(Arc::new(TextEmbedder::load(EncoderConfig::new(dir))?)),
            None => None,
        };

        Ok(Self {
            embedder,
            config: scorer_config,
        })
    }

    /// Replaces the thresholds after validating them.
    pub fn with_config(mut self, config: ScorerConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the configured thresholds.
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Returns `true` if an embedding model is attached.
    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }

    /// Embedding-strategy verdict with the configured threshold.
    pub fn embedding_similarity(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<Verdict, ScoringError> {
        self.embedding_similarity_with_threshold(text_a, text_b, self.config.embedding_threshold)
    }

    /// Embedding-strategy verdict with a caller-supplied threshold.
    ///
    /// Empty or whitespace-only inputs score 0.0 without touching the
    /// model; a missing or broken model is the one hard failure.
    pub fn embedding_similarity_with_threshold(
        &self,
        text_a: &str,
        text_b: &str,
        threshold: f32,
    ) -> Result<Verdict, ScoringError> {
        let embedder = self
            .embedder
            .as_ref()
            .ok_or(ScoringError::ModelNotConfigured)?;

        if text_a.trim().is_empty() || text_b.trim().is_empty() {
            debug!("degenerate input for embedding strategy, scoring 0.0");
            return Ok(Verdict::NotSimilar { score: 0.0 });
        }

        let vector_a = embedder.embed(text_a)?;
        let vector_b = embedder.embed(text_b)?;

        let score = cosine_similarity(&vector_a, &vector_b);

        debug!(score, threshold, "embedding similarity computed");

        Ok(decide(score, threshold))
    }

    /// Lexical-strategy verdict with the configured threshold.
    pub fn lexical_similarity(&self, text_a: &str, text_b: &str) -> Verdict {
        self.lexical_similarity_with_threshold(text_a, text_b, self.config.lexical_threshold)
    }

    /// Lexical-strategy verdict with a caller-supplied threshold.
    ///
    /// Infallible: inputs whose combined vocabulary is empty after
    /// normalization score 0.0 and are judged not similar.
    pub fn lexical_similarity_with_threshold(
        &self,
        text_a: &str,
        text_b: &str,
        threshold: f32,
    ) -> Verdict {
        let norm_a = normalize(text_a);
        let norm_b = normalize(text_b);

        let Some(pair) = TfidfPair::build(&norm_a, &norm_b) else {
            debug!("empty vocabulary for lexical strategy, scoring 0.0");
            return Verdict::NotSimilar { score: 0.0 };
        };

        let score = cosine_similarity(&pair.vector_a, &pair.vector_b);

        debug!(
            score,
            threshold,
            vocabulary_size = pair.dimension(),
            "lexical similarity computed"
        );

        decide(score, threshold)
    }

    /// Runs the selected strategy with its configured threshold.
    pub fn check(
        &self,
        strategy: Strategy,
        text_a: &str,
        text_b: &str,
    ) -> Result<Verdict, ScoringError> {
        match strategy {
            Strategy::Lexical => Ok(self.lexical_similarity(text_a, text_b)),
            Strategy::Embedding => self.embedding_similarity(text_a, text_b),
        }
    }
}
