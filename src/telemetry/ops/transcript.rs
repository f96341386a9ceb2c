use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Transcript;

#[derive(Copy, Clone, Debug)]
pub enum Phase { ParseRef, FetchPage, SelectTrack, FetchTrack, Clean }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::ParseRef => "parse_ref",
        Phase::FetchPage => "fetch_page",
        Phase::SelectTrack => "select_track",
        Phase::FetchTrack => "fetch_track",
        Phase::Clean => "clean",
    }}
    fn span(&self) -> Span { match self {
        Phase::ParseRef => info_span!("parse_ref"),
        Phase::FetchPage => info_span!("fetch_page"),
        Phase::SelectTrack => info_span!("select_track"),
        Phase::FetchTrack => info_span!("fetch_track"),
        Phase::Clean => info_span!("clean"),
    }}
}

impl OpMarker for Transcript {
    const NAME: &'static str = "transcript";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("transcript") }
}
