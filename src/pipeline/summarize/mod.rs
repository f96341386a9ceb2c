pub mod bounds;
pub mod reduce;

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Args;

use crate::llm::{HfClient, HfClientConfig};
use crate::output;
use crate::telemetry;
use crate::telemetry::ops::summarize::Phase as SummarizePhase;
use crate::tokenizer::BartTokenizer;
use crate::tokenizer::bart::DEFAULT_TOKENIZER_MODEL;

use self::reduce::{ReduceConfig, Reducer};

#[derive(Args)]
pub struct SummarizeCmd {
    /// Video URL or bare 11-character video id
    pub source: Option<String>,

    /// Summarize a local transcript file instead of fetching captions
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// First-pass chunk budget in model tokens
    #[arg(long, default_value_t = 900)]
    pub chunk_budget: usize,

    /// Second-pass budget when combined summaries exceed the input ceiling
    #[arg(long, default_value_t = 800)]
    pub rechunk_budget: usize,

    /// Cap on any single summary's max_length
    #[arg(long, default_value_t = 384)]
    pub summary_cap: usize,

    /// Summarization model on the HF inference API
    #[arg(long, env = "YTB_SUMMARIZER_MODEL", default_value = DEFAULT_TOKENIZER_MODEL)]
    pub model: String,

    /// Tokenizer repo, when it differs from the summarization model
    #[arg(long)]
    pub tokenizer_model: Option<String>,
}

pub async fn run(args: SummarizeCmd) -> Result<()> {
    ensure!(
        args.rechunk_budget < args.chunk_budget,
        "--rechunk-budget must be smaller than --chunk-budget"
    );

    let log = telemetry::summarize();
    let _g = log
        .root_span_kv([
            ("source", format!("{:?}", args.source)),
            ("from_file", format!("{:?}", args.from_file)),
            ("chunk_budget", args.chunk_budget.to_string()),
            ("rechunk_budget", args.rechunk_budget.to_string()),
            ("summary_cap", args.summary_cap.to_string()),
            ("model", args.model.clone()),
        ])
        .entered();

    // a capability that cannot be invoked at all is fatal before any work starts
    let client = HfClient::new(HfClientConfig::from_env().with_model(&args.model))
        .context("init summarizer client")?;

    let _f = log.span(&SummarizePhase::FetchTranscript).entered();
    let text = super::load_document(args.source.as_deref(), args.from_file.as_deref()).await?;
    drop(_f);

    let _t = log.span(&SummarizePhase::LoadTokenizer).entered();
    let tokenizer_model = args.tokenizer_model.as_deref().unwrap_or(&args.model);
    let tokenizer = BartTokenizer::from_pretrained(tokenizer_model)?;
    drop(_t);

    let cfg = ReduceConfig {
        chunk_budget: args.chunk_budget,
        rechunk_budget: args.rechunk_budget,
        input_ceiling: tokenizer.model_max_length(),
        summary_cap: args.summary_cap,
        ..ReduceConfig::default()
    };

    let reducer = Reducer::new(&tokenizer, &client, cfg);
    let summary = reducer.reduce(&text).await?;

    output::emit_summary(&summary)
}
