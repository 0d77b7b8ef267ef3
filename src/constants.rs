//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values from these primaries to avoid drift.

/// Output dimension of the default sentence-embedding model (MiniLM width).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the embedding model per text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default decision threshold for the embedding strategy.
pub const DEFAULT_EMBEDDING_THRESHOLD: f32 = 0.70;

/// Default decision threshold for the lexical strategy.
pub const DEFAULT_LEXICAL_THRESHOLD: f32 = 0.50;
