use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Chunk;

#[derive(Copy, Clone, Debug)]
pub enum Phase { LoadTokenizer, Plan }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::LoadTokenizer => "load_tokenizer",
        Phase::Plan => "plan",
    }}
    fn span(&self) -> Span { match self {
        Phase::LoadTokenizer => info_span!("load_tokenizer"),
        Phase::Plan => info_span!("plan"),
    }}
}

impl OpMarker for Chunk {
    const NAME: &'static str = "chunk";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("chunk") }
}
