use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod llm;
mod output;
mod pipeline;
mod telemetry;
mod tokenizer;
mod transcript;

#[derive(Parser)]
#[command(name = "yt-brief", about = "YouTube transcript summarizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a transcript and produce a single short summary
    Summarize(pipeline::summarize::SummarizeCmd),
    /// Fetch and clean a transcript without summarizing
    Transcript(transcript::TranscriptCmd),
    /// Split a transcript into model-token chunks without summarizing
    Chunk(pipeline::chunk::ChunkCmd),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    // logging goes to stderr; stdout carries exactly one JSON object per run
    telemetry::config::init_tracing();

    let result = run(cli).await;

    if let Err(e) = result {
        tracing::error!(error = ?e, "run failed");
        output::emit_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summarize(args) => pipeline::summarize::run(args).await,
        Commands::Transcript(args) => transcript::run(args).await,
        Commands::Chunk(args) => pipeline::chunk::run(args).await,
    }
}
