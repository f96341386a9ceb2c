use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\})\s*;").unwrap()
});

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// YouTube marks auto-generated (speech recognition) tracks with kind "asr".
    pub fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Pull the embedded `ytInitialPlayerResponse` JSON out of a watch page.
pub fn extract_player_response(html: &str) -> Result<Value> {
    let caps = PLAYER_RESPONSE_RE.captures(html).ok_or_else(|| {
        anyhow::anyhow!("ytInitialPlayerResponse not found, page structure might have changed")
    })?;
    serde_json::from_str(&caps[1]).context("parse ytInitialPlayerResponse")
}

/// List the caption tracks a player response advertises.
///
/// A non-OK playability status (age gate, region lock, removed video) is
/// reported as such instead of a generic "no captions" error.
pub fn caption_tracks(player: &Value) -> Result<Vec<CaptionTrack>> {
    if let Some(status) = player["playabilityStatus"]["status"].as_str() {
        if status != "OK" {
            let reason = player["playabilityStatus"]["reason"]
                .as_str()
                .unwrap_or("no reason given");
            bail!("video is not playable ({status}): {reason}");
        }
    }

    let Some(tracks) = player["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"]
        .as_array()
    else {
        bail!("no captions available for this video");
    };

    serde_json::from_value(Value::Array(tracks.clone())).context("parse caption tracks")
}

/// Pick an English track, preferring a manually authored one over ASR.
pub fn select_english_track(tracks: &[CaptionTrack]) -> Result<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.language_code.starts_with("en") && !t.is_auto_generated())
        .or_else(|| tracks.iter().find(|t| t.language_code.starts_with("en")))
        .ok_or_else(|| anyhow::anyhow!("no English caption track available"))
}
