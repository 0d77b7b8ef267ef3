use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("no embedding model configured")]
    ModelNotConfigured,

    #[error("invalid threshold {value}: must be within [-1.0, 1.0]")]
    InvalidThreshold { value: f32 },
}
