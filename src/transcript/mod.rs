//! Transcript acquisition: resolve a video reference, pull the watch page,
//! pick an English caption track and join its segments into one text span.
//!
//! Everything here runs before the summarization core; any failure is a
//! structured error for the whole run.

pub mod clean;
pub mod json3;
pub mod player;
pub mod video_id;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::output;
use crate::telemetry;
use crate::telemetry::ops::transcript::Phase as TranscriptPhase;

const WATCH_URL: &str = "https://www.youtube.com/watch";

#[derive(Args)]
pub struct TranscriptCmd {
    /// Video URL or bare 11-character video id
    pub source: String,
}

pub async fn run(args: TranscriptCmd) -> Result<()> {
    let log = telemetry::transcript();
    let _g = log
        .root_span_kv([("source", args.source.clone())])
        .entered();

    let text = fetch_transcript(&args.source).await?;
    output::emit_transcript(&text)
}

/// Fetch and clean the caption text for a video reference.
pub async fn fetch_transcript(source: &str) -> Result<String> {
    let log = telemetry::transcript();

    let _p = log.span(&TranscriptPhase::ParseRef).entered();
    let video_id = video_id::parse_video_ref(source)?;
    drop(_p);

    let client = reqwest::Client::new();

    let _f = log.span(&TranscriptPhase::FetchPage).entered();
    let html = client
        .get(WATCH_URL)
        .query(&[("v", video_id.as_str())])
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .context("fetch watch page")?
        .error_for_status()
        .context("watch page request rejected")?
        .text()
        .await
        .context("read watch page body")?;
    drop(_f);

    let _e = log.span(&TranscriptPhase::SelectTrack).entered();
    let player = player::extract_player_response(&html)?;
    let tracks = player::caption_tracks(&player)?;
    let track = player::select_english_track(&tracks)?;
    log.info_kv(
        "selected caption track",
        [
            ("language", track.language_code.clone()),
            ("auto_generated", track.is_auto_generated().to_string()),
        ],
    );
    let track_url = json3_url(&track.base_url);
    drop(_e);

    let _t = log.span(&TranscriptPhase::FetchTrack).entered();
    let raw = client
        .get(&track_url)
        .send()
        .await
        .context("fetch caption track")?
        .error_for_status()
        .context("caption track request rejected")?
        .text()
        .await
        .context("read caption track body")?;
    drop(_t);

    let _c = log.span(&TranscriptPhase::Clean).entered();
    let text = json3::collect_text(&raw)?;
    let cleaned = clean::clean_caption_text(&text);
    if cleaned.is_empty() {
        bail!("caption track for {video_id} contains no text");
    }
    log.info_kv("transcript ready", [("chars", cleaned.len().to_string())]);

    Ok(cleaned)
}

fn json3_url(base_url: &str) -> String {
    if base_url.contains('?') {
        format!("{base_url}&fmt=json3")
    } else {
        format!("{base_url}?fmt=json3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json3_url_appends_format_param() {
        assert_eq!(
            json3_url("https://www.youtube.com/api/timedtext?v=abc&lang=en"),
            "https://www.youtube.com/api/timedtext?v=abc&lang=en&fmt=json3"
        );
        assert_eq!(
            json3_url("https://www.youtube.com/api/timedtext"),
            "https://www.youtube.com/api/timedtext?fmt=json3"
        );
    }
}
