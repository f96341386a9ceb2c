use anyhow::{Context, Result, anyhow};
use hf_hub::api::sync::Api;
use tokenizers::Tokenizer;

use super::Tokenize;

pub const DEFAULT_TOKENIZER_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
const FALLBACK_MODEL_MAX_LENGTH: usize = 1024;

/// Tokenizer for the distilbart summarization family, loaded from the HF Hub.
///
/// Counts are taken without special tokens so that a word's standalone length
/// matches its contribution inside a chunk.
#[derive(Debug, Clone)]
pub struct BartTokenizer {
    inner: Tokenizer,
    model_max_length: usize,
}

impl BartTokenizer {
    pub fn from_pretrained(model: &str) -> Result<Self> {
        let inner = Tokenizer::from_pretrained(model, None)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("load tokenizer for {model}"))?;

        // read tokenizer_config.json for the model's hard input ceiling
        let model_max_length = Api::new()
            .ok()
            .and_then(|api| api.model(model.to_string()).get("tokenizer_config.json").ok())
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok())
            .and_then(|cfg| cfg.get("model_max_length").and_then(|v| v.as_u64()))
            .map(|v| v as usize)
            .unwrap_or(FALLBACK_MODEL_MAX_LENGTH);

        Ok(Self {
            inner,
            model_max_length,
        })
    }

    /// The model's hard input ceiling in tokens (1024 for the BART family).
    pub fn model_max_length(&self) -> usize {
        self.model_max_length
    }
}

impl Tokenize for BartTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        let enc = self
            .inner
            .encode(text, false)
            .map_err(|e| anyhow!("{}", e))?;
        Ok(enc.get_ids().len())
    }

    fn truncate_to(&self, text: &str, max_tokens: usize) -> Result<String> {
        let enc = self
            .inner
            .encode(text, false)
            .map_err(|e| anyhow!("{}", e))?;
        let ids = enc.get_ids();
        if ids.len() <= max_tokens {
            return Ok(text.to_string());
        }
        self.inner
            .decode(&ids[..max_tokens], true)
            .map_err(|e| anyhow!("{}", e))
    }
}
