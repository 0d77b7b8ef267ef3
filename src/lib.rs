//! Pairwise text-similarity core.
//!
//! Two independent pipelines feed one decision rule: a sparse lexical
//! (TF-IDF) path and a dense sentence-embedding path, each producing a
//! cosine similarity that is compared against a per-strategy threshold.
//!
//! # Quick start
//!
//! ```
//! use simcheck::{EncoderConfig, SimilarityScorer, Strategy, TextEmbedder};
//! use std::sync::Arc;
//!
//! // Stub encoder: deterministic vectors, no model files required.
//! let embedder = Arc::new(TextEmbedder::load(EncoderConfig::stub())?);
//! let scorer = SimilarityScorer::new(embedder);
//!
//! let verdict = scorer.lexical_similarity(
//!     "The quick brown fox jumps over the lazy dog",
//!     "The fast brown fox leaps over the sleepy dog",
//! );
//! assert!(verdict.is_similar());
//!
//! let verdict = scorer.check(Strategy::Embedding, "hello there", "hello there")?;
//! assert_eq!(verdict.label(), "yes");
//! # Ok::<(), simcheck::ScoringError>(())
//! ```
//!
//! # Module map
//!
//! - [`normalize`] - text cleanup for the lexical path
//! - [`lexical`] - two-document TF-IDF vectorization
//! - [`embedding`] - load-once sentence embedder (candle BERT, or a
//!   deterministic stub for tests)
//! - [`scoring`] - cosine math, verdicts, strategy entry points
//! - [`config`] - `SIMCHECK_*` environment configuration

pub mod config;
pub mod constants;
pub mod embedding;
pub mod lexical;
pub mod normalize;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_THRESHOLD, DEFAULT_LEXICAL_THRESHOLD,
    DEFAULT_MAX_SEQ_LEN,
};
pub use embedding::{EmbeddingError, EncoderConfig, TextEmbedder};
pub use lexical::TfidfPair;
pub use normalize::normalize;
pub use scoring::{
    ScorerConfig, ScoringError, SimilarityScorer, Strategy, Verdict, cosine_similarity, decide,
};
