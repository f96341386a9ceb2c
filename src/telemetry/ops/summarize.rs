use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Summarize;

#[derive(Copy, Clone, Debug)]
pub enum Phase { FetchTranscript, LoadTokenizer, Chunk, Combine, Rechunk, Finalize }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::FetchTranscript => "fetch_transcript",
        Phase::LoadTokenizer => "load_tokenizer",
        Phase::Chunk => "chunk",
        Phase::Combine => "combine",
        Phase::Rechunk => "rechunk",
        Phase::Finalize => "finalize",
    }}
    fn span(&self) -> Span { match self {
        Phase::FetchTranscript => info_span!("fetch_transcript"),
        Phase::LoadTokenizer => info_span!("load_tokenizer"),
        Phase::Chunk => info_span!("chunk"),
        Phase::Combine => info_span!("combine"),
        Phase::Rechunk => info_span!("rechunk"),
        Phase::Finalize => info_span!("finalize"),
    }}
}

impl OpMarker for Summarize {
    const NAME: &'static str = "summarize";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("summarize") }
}
