pub mod types;

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

use types::{ErrorEnvelope, SummaryEnvelope, TranscriptEnvelope};

// Single-line JSON on stdout; everything else in this program logs to stderr.
pub fn emit<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout();
    serde_json::to_writer(&mut out, value)?;
    writeln!(&mut out)?;
    Ok(())
}

pub fn emit_summary(summary: &str) -> Result<()> {
    emit(&SummaryEnvelope { summary })
}

pub fn emit_transcript(transcript: &str) -> Result<()> {
    emit(&TranscriptEnvelope { transcript })
}

/// Last-resort writer for the error envelope. Failures to serialize or write
/// here are swallowed; the process is already exiting non-zero.
pub fn emit_error(message: &str) {
    let _ = emit(&ErrorEnvelope { error: message });
}
