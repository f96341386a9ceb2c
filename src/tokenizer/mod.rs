pub mod bart;

pub use bart::BartTokenizer;

use anyhow::Result;

/// Model-token counting as the pipeline consumes it: only lengths matter,
/// never the token ids themselves.
pub trait Tokenize {
    fn count_tokens(&self, text: &str) -> Result<usize>;

    /// Re-encode `text` and decode back at most `max_tokens` of it.
    fn truncate_to(&self, text: &str, max_tokens: usize) -> Result<String>;
}
