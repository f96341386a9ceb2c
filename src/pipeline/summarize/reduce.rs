// Hierarchical reduction: chunk summaries, then summarize the summaries.

use anyhow::{Result, bail};

use crate::llm::{SummaryRequest, Summarizer};
use crate::pipeline::chunk::logic::chunk_words;
use crate::telemetry;
use crate::telemetry::ops::summarize::Phase as SummarizePhase;
use crate::tokenizer::Tokenize;

use super::bounds::bounds;

#[derive(Debug, Clone)]
pub struct ReduceConfig {
    /// First-pass chunk budget, leaving headroom under the input ceiling.
    pub chunk_budget: usize,
    /// Second-pass budget, strictly smaller so re-chunked pieces always fit.
    pub rechunk_budget: usize,
    /// The model's hard input ceiling in tokens.
    pub input_ceiling: usize,
    /// Cap on any single summary's max_length.
    pub summary_cap: usize,
    /// Concatenations at or below this many tokens pass through verbatim.
    pub passthrough_tokens: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            chunk_budget: 900,
            rechunk_budget: 800,
            input_ceiling: 1024,
            summary_cap: 384,
            passthrough_tokens: 100,
        }
    }
}

/// Two-pass reducer over an unbounded document.
///
/// Pass 1 summarizes each chunk of the document; if the concatenated
/// summaries still exceed the input ceiling, pass 2 re-chunks the
/// concatenation at a smaller budget and summarizes again. Depth is fixed at
/// two: an explicit second pass, not recursion.
pub struct Reducer<'a> {
    tokenizer: &'a dyn Tokenize,
    summarizer: &'a dyn Summarizer,
    cfg: ReduceConfig,
}

impl<'a> Reducer<'a> {
    pub fn new(
        tokenizer: &'a dyn Tokenize,
        summarizer: &'a dyn Summarizer,
        cfg: ReduceConfig,
    ) -> Self {
        Self {
            tokenizer,
            summarizer,
            cfg,
        }
    }

    pub async fn reduce(&self, text: &str) -> Result<String> {
        let log = telemetry::summarize();

        let _c = log.span(&SummarizePhase::Chunk).entered();
        let chunks = chunk_words(text, self.cfg.chunk_budget, self.tokenizer)?;
        drop(_c);
        if chunks.is_empty() {
            bail!("document has no words to summarize");
        }
        log.info_kv(
            "chunked document",
            [
                ("chunks", chunks.len().to_string()),
                ("budget", self.cfg.chunk_budget.to_string()),
            ],
        );

        let first_pass = self.summarize_chunks(&chunks, "chunk").await;

        let _m = log.span(&SummarizePhase::Combine).entered();
        let combined = first_pass.join(" ");
        let combined_tokens = self.tokenizer.count_tokens(&combined)?;
        drop(_m);

        let final_text = if combined_tokens > self.cfg.input_ceiling {
            // still too long for one call: re-chunk smaller and summarize again
            let _r = log.span(&SummarizePhase::Rechunk).entered();
            let second_chunks =
                chunk_words(&combined, self.cfg.rechunk_budget, self.tokenizer)?;
            drop(_r);
            log.info_kv(
                "combined summary over input ceiling, re-chunking",
                [
                    ("combined_tokens", combined_tokens.to_string()),
                    ("chunks", second_chunks.len().to_string()),
                ],
            );
            let second_pass = self.summarize_chunks(&second_chunks, "final chunk").await;
            second_pass.join(" ")
        } else if combined_tokens <= self.cfg.passthrough_tokens {
            // already short enough to stand as the summary
            combined
        } else {
            let trimmed = self
                .tokenizer
                .truncate_to(&combined, self.cfg.input_ceiling)?;
            let token_count = self.tokenizer.count_tokens(&trimmed)?;
            let b = bounds(token_count, self.cfg.summary_cap);
            match self
                .summarizer
                .summarize(SummaryRequest {
                    text: trimmed.clone(),
                    min_length: b.min_length,
                    max_length: b.max_length,
                })
                .await
            {
                Ok(summary) => summary,
                Err(e) => {
                    // partial result beats total failure: keep the combined
                    // chunk summaries when the final condensation call fails
                    log.warn_kv(
                        "final summarization failed, keeping combined chunk summaries",
                        [("error", e.to_string())],
                    );
                    trimmed
                }
            }
        };

        let _f = log.span(&SummarizePhase::Finalize).entered();
        Ok(close_sentence(&final_text))
    }

    /// Summarize each chunk in document order. A failed call becomes an
    /// inline placeholder naming the chunk and the cause; the run continues.
    async fn summarize_chunks(&self, chunks: &[String], label: &str) -> Vec<String> {
        let log = telemetry::summarize();
        let mut summaries = Vec::with_capacity(chunks.len());

        for (i, chunk) in chunks.iter().enumerate() {
            log.debug_kv(
                "summarizing chunk",
                [("chunk", (i + 1).to_string()), ("of", chunks.len().to_string())],
            );
            let summary = match self.summarize_one(chunk).await {
                Ok(summary) => summary,
                Err(e) => {
                    log.warn_kv(
                        "chunk summarization failed",
                        [("chunk", (i + 1).to_string()), ("error", e.to_string())],
                    );
                    format!("[Error in {label} {}: {e}]", i + 1)
                }
            };
            summaries.push(summary);
        }

        summaries
    }

    async fn summarize_one(&self, chunk: &str) -> Result<String> {
        let token_count = self.tokenizer.count_tokens(chunk)?;
        let b = bounds(token_count, self.cfg.summary_cap);
        let summary = self
            .summarizer
            .summarize(SummaryRequest {
                text: chunk.to_string(),
                min_length: b.min_length,
                max_length: b.max_length,
            })
            .await?;
        Ok(summary)
    }
}

/// Normalize the end of a summary so it reads as grammatically closed.
///
/// If the text does not already end in terminal punctuation, the last
/// sentence boundary inside the final 30% of the text wins (the unfinished
/// trailing sentence is dropped); with no boundary that late, a period is
/// appended instead.
pub fn close_sentence(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.ends_with(['.', '!', '?']) {
        return trimmed.to_string();
    }
    match trimmed.rfind(['.', '!', '?']) {
        Some(idx) if idx >= trimmed.len() * 7 / 10 => trimmed[..=idx].to_string(),
        _ => format!("{trimmed}."),
    }
}
