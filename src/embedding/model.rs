use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};

/// Mean-pooling BERT sentence encoder.
///
/// Loads a MiniLM-style checkpoint (`config.json` + `model.safetensors`)
/// and reduces the token hidden states of one sequence to a single vector.
pub(crate) struct BertEncoder {
    bert: BertModel,
    hidden_size: usize,
}

impl BertEncoder {
    pub(crate) fn load(model_dir: &Path, device: &Device) -> candle_core::Result<Self> {
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("failed to parse config.json: {e}")))?;

        let weights_path = model_dir.join("model.safetensors");
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        // Sentence-transformers exports prefix the weights, plain BERT
        // exports do not.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb.clone(), &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Runs the encoder and mean-pools token states into one vector.
    pub(crate) fn encode(
        &self,
        token_ids: &[u32],
        device: &Device,
    ) -> candle_core::Result<Vec<f32>> {
        let input_ids = Tensor::new(token_ids, device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        // [1, seq_len, hidden] -> mean over the sequence axis. The single
        // sequence is never padded, so a plain mean is exact.
        let hidden = self.bert.forward(&input_ids, &token_type_ids, None)?;
        let pooled = (hidden.sum(1)? / (token_ids.len() as f64))?;

        pooled.squeeze(0)?.to_vec1::<f32>()
    }
}
