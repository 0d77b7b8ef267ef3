use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.embedding_dim, ENCODER_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, ENCODER_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_encoder_config_new() {
        let config = EncoderConfig::new("/models/minilm");
        assert_eq!(config.model_dir, PathBuf::from("/models/minilm"));
        assert_eq!(config.weights_path(), PathBuf::from("/models/minilm/model.safetensors"));
        assert_eq!(config.bert_config_path(), PathBuf::from("/models/minilm/config.json"));
        assert_eq!(config.tokenizer_path(), PathBuf::from("/models/minilm/tokenizer.json"));
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_encoder_config_stub() {
        let config = EncoderConfig::stub();
        assert!(config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_encoder_config_validation_empty_dir_no_stub() {
        let config = EncoderConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_encoder_config_validation_nonexistent_dir() {
        let config = EncoderConfig::new("/nonexistent/model/dir");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_encoder_config_availability_probes_empty() {
        let config = EncoderConfig::default();
        assert!(!config.model_available());
        assert!(!config.tokenizer_available());
    }

    #[test]
    #[serial]
    fn test_encoder_config_from_env_unset() {
        unsafe {
            env::remove_var(EncoderConfig::ENV_MODEL_DIR);
        }

        let config = EncoderConfig::from_env();
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    #[serial]
    fn test_encoder_config_from_env_set() {
        unsafe {
            env::set_var(EncoderConfig::ENV_MODEL_DIR, "  /custom/minilm  ");
        }

        let config = EncoderConfig::from_env();
        assert_eq!(config.model_dir, PathBuf::from("/custom/minilm"));

        unsafe {
            env::remove_var(EncoderConfig::ENV_MODEL_DIR);
        }
    }

    #[test]
    #[serial]
    fn test_encoder_config_from_env_whitespace_only() {
        unsafe {
            env::set_var(EncoderConfig::ENV_MODEL_DIR, " \t ");
        }

        let config = EncoderConfig::from_env();
        assert!(config.model_dir.as_os_str().is_empty());

        unsafe {
            env::remove_var(EncoderConfig::ENV_MODEL_DIR);
        }
    }
}

mod embedder_tests {
    use super::*;

    fn stub_embedder() -> TextEmbedder {
        TextEmbedder::load(EncoderConfig::stub()).expect("stub embedder loads")
    }

    #[test]
    fn test_load_stub() {
        let embedder = stub_embedder();
        assert!(embedder.is_stub());
        assert!(!embedder.has_model());
    }

    #[test]
    fn test_stub_determinism() {
        let embedder = stub_embedder();
        let a = embedder.embed("Hello, world!").expect("embed");
        let b = embedder.embed("Hello, world!").expect("embed");
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_uniqueness() {
        let embedder = stub_embedder();
        let a = embedder.embed("Hello").expect("embed");
        let b = embedder.embed("World").expect("embed");
        assert_ne!(a, b);
    }

    #[test]
    fn test_stub_dimension() {
        let embedder = stub_embedder();
        let embedding = embedder.embed("test").expect("embed");
        assert_eq!(embedding.len(), ENCODER_EMBEDDING_DIM);
        assert_eq!(embedder.embedding_dim(), ENCODER_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_output_is_unit_length() {
        let embedder = stub_embedder();

        for text in ["test", "", "   ", "a longer sentence with several words"] {
            let embedding = embedder.embed(text).expect("embed");
            let norm: f32 = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
            assert!(
                (norm - 1.0).abs() < 1e-5,
                "expected unit norm for {text:?}, got {norm}"
            );
        }
    }

    #[test]
    fn test_stub_custom_dimension() {
        let config = EncoderConfig {
            testing_stub: true,
            embedding_dim: 64,
            ..Default::default()
        };
        let embedder = TextEmbedder::load(config).expect("load");
        assert_eq!(embedder.embed("test").expect("embed").len(), 64);
    }

    #[test]
    fn test_embed_batch_matches_single() {
        let embedder = stub_embedder();
        let texts = ["hello", "world", ""];

        let batch = embedder.embed_batch(&texts).expect("embed batch");
        assert_eq!(batch.len(), 3);

        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(vector, &embedder.embed(text).expect("embed"));
        }
    }

    #[test]
    fn test_embed_batch_empty() {
        let embedder = stub_embedder();
        assert!(embedder.embed_batch(&[]).expect("embed batch").is_empty());
    }

    #[test]
    fn test_stub_concurrent_use() {
        use std::sync::Arc;
        use std::thread;

        let embedder = Arc::new(stub_embedder());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let embedder = Arc::clone(&embedder);
                thread::spawn(move || {
                    let text = format!("thread {i} text");
                    embedder.embed(&text).expect("embed")
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), ENCODER_EMBEDDING_DIM);
        }
    }

    #[test]
    fn test_debug_impl() {
        let embedder = stub_embedder();
        let debug_str = format!("{embedder:?}");
        assert!(debug_str.contains("TextEmbedder"));
        assert!(debug_str.contains("Stub"));
    }
}

mod error_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_model_dir_fails() {
        let result = TextEmbedder::load(EncoderConfig::default());
        assert!(matches!(
            result.unwrap_err(),
            EmbeddingError::InvalidConfig { .. }
        ));
    }

    #[test]
    fn test_load_nonexistent_dir_is_model_unavailable() {
        let result = TextEmbedder::load(EncoderConfig::new("/definitely/not/here"));
        match result.unwrap_err() {
            EmbeddingError::ModelUnavailable { path } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here"));
            }
            other => panic!("expected ModelUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_load_dir_without_files_is_model_unavailable() {
        let temp_dir = TempDir::new().expect("create temp dir");

        let result = TextEmbedder::load(EncoderConfig::new(temp_dir.path()));
        assert!(matches!(
            result.unwrap_err(),
            EmbeddingError::ModelUnavailable { .. }
        ));
    }

    #[test]
    fn test_load_with_invalid_model_files_fails() {
        let temp_dir = TempDir::new().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.json"), "{}").expect("write config");
        std::fs::write(temp_dir.path().join("model.safetensors"), b"junk").expect("write weights");
        std::fs::write(temp_dir.path().join("tokenizer.json"), "{}").expect("write tokenizer");

        let result = TextEmbedder::load(EncoderConfig::new(temp_dir.path()));
        match result.unwrap_err() {
            EmbeddingError::TokenizationFailed { reason }
            | EmbeddingError::ModelLoadFailed { reason } => assert!(!reason.is_empty()),
            other => panic!("expected load failure, got {other:?}"),
        }
    }
}

/// Real-model checks. Run with a MiniLM checkpoint:
/// `SIMCHECK_MODEL_DIR=/models/all-MiniLM-L6-v2 cargo test -- --ignored`
#[test]
#[ignore]
fn test_real_model_embedding_dimension() {
    let config = EncoderConfig::from_env();
    let embedder = TextEmbedder::load(config).expect("model loads");
    assert!(embedder.has_model());

    let embedding = embedder.embed("Test sentence").expect("embed");
    assert_eq!(embedding.len(), embedder.embedding_dim());
}

#[test]
#[ignore]
fn test_real_model_determinism() {
    let config = EncoderConfig::from_env();
    let embedder = TextEmbedder::load(config).expect("model loads");

    let text = "The quick brown fox jumps over the lazy dog";
    assert_eq!(
        embedder.embed(text).expect("embed"),
        embedder.embed(text).expect("embed")
    );
}
