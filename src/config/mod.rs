//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SIMCHECK_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBEDDING_THRESHOLD, DEFAULT_LEXICAL_THRESHOLD};

/// Crate configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIMCHECK_*` overrides on top of
/// defaults, then
/// [`SimilarityScorer::from_config`](crate::SimilarityScorer::from_config)
/// to perform the one-time model load at process startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the embedding model files. `None` disables the
    /// embedding strategy.
    pub model_dir: Option<PathBuf>,

    /// Decision threshold for the embedding strategy. Default: `0.70`.
    pub embedding_threshold: f32,

    /// Decision threshold for the lexical strategy. Default: `0.50`.
    pub lexical_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: None,
            embedding_threshold: DEFAULT_EMBEDDING_THRESHOLD,
            lexical_threshold: DEFAULT_LEXICAL_THRESHOLD,
        }
    }
}

impl Config {
    const ENV_MODEL_DIR: &'static str = "SIMCHECK_MODEL_DIR";
    const ENV_EMBEDDING_THRESHOLD: &'static str = "SIMCHECK_EMBEDDING_THRESHOLD";
    const ENV_LEXICAL_THRESHOLD: &'static str = "SIMCHECK_LEXICAL_THRESHOLD";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let embedding_threshold = Self::parse_threshold_from_env(
            Self::ENV_EMBEDDING_THRESHOLD,
            defaults.embedding_threshold,
        )?;
        let lexical_threshold =
            Self::parse_threshold_from_env(Self::ENV_LEXICAL_THRESHOLD, defaults.lexical_threshold)?;

        Ok(Self {
            model_dir,
            embedding_threshold,
            lexical_threshold,
        })
    }

    /// Validates paths and threshold ranges (does not load anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        for (name, value) in [
            (Self::ENV_EMBEDDING_THRESHOLD, self.embedding_threshold),
            (Self::ENV_LEXICAL_THRESHOLD, self.lexical_threshold),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }

        Ok(())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_threshold_from_env(var_name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let parsed: f32 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            name: var_name,
                            value: value.clone(),
                            source: e,
                        })?;

                if !(-1.0..=1.0).contains(&parsed) {
                    return Err(ConfigError::ThresholdOutOfRange {
                        name: var_name,
                        value: parsed,
                    });
                }

                Ok(parsed)
            }
            Err(_) => Ok(default),
        }
    }
}
