pub mod logic;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::output::types::{ChunkReport, ChunkStat};
use crate::telemetry;
use crate::telemetry::ops::chunk::Phase as ChunkPhase;
use crate::tokenizer::BartTokenizer;
use crate::tokenizer::Tokenize;
use crate::tokenizer::bart::DEFAULT_TOKENIZER_MODEL;

use self::logic::chunk_words;

const PREVIEW_CHARS: usize = 80;

#[derive(Args)]
pub struct ChunkCmd {
    /// Video URL or bare 11-character video id
    pub source: Option<String>,

    /// Chunk a local transcript file instead of fetching captions
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Chunk budget in model tokens
    #[arg(long, default_value_t = 900)]
    pub chunk_budget: usize,

    /// Tokenizer repo to count tokens with
    #[arg(long, default_value = DEFAULT_TOKENIZER_MODEL)]
    pub tokenizer_model: String,
}

/// Run only the chunker and report the plan. No summarizer calls are made,
/// so this is a cheap way to see how a transcript would split.
pub async fn run(args: ChunkCmd) -> Result<()> {
    let log = telemetry::chunk();
    let _g = log
        .root_span_kv([
            ("source", format!("{:?}", args.source)),
            ("from_file", format!("{:?}", args.from_file)),
            ("chunk_budget", args.chunk_budget.to_string()),
            ("tokenizer_model", args.tokenizer_model.clone()),
        ])
        .entered();

    let text = super::load_document(args.source.as_deref(), args.from_file.as_deref()).await?;

    let _t = log.span(&ChunkPhase::LoadTokenizer).entered();
    let tokenizer = BartTokenizer::from_pretrained(&args.tokenizer_model)?;
    drop(_t);

    let _p = log.span(&ChunkPhase::Plan).entered();
    let chunks = chunk_words(&text, args.chunk_budget, &tokenizer)?;

    let mut stats = Vec::with_capacity(chunks.len());
    let mut total_tokens = 0usize;
    for (index, chunk) in chunks.iter().enumerate() {
        let tokens = tokenizer.count_tokens(chunk)?;
        total_tokens += tokens;
        stats.push(ChunkStat {
            index,
            tokens,
            words: chunk.split_whitespace().count(),
            preview: preview(chunk),
        });
    }
    drop(_p);

    log.info_kv(
        "chunk plan ready",
        [
            ("chunks", stats.len().to_string()),
            ("total_tokens", total_tokens.to_string()),
        ],
    );

    output::emit(&ChunkReport {
        budget: args.chunk_budget,
        total_tokens,
        chunks: stats,
    })
}

fn preview(chunk: &str) -> String {
    let mut p: String = chunk.chars().take(PREVIEW_CHARS).collect();
    if chunk.chars().count() > PREVIEW_CHARS {
        p.push('…');
    }
    p
}
