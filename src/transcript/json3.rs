use anyhow::{Context, Result};
use serde::Deserialize;

// Shape of the `fmt=json3` timedtext payload: a flat list of events, each
// carrying zero or more text segments. Timing fields are ignored.
#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(default)]
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: Option<String>,
}

/// Join every caption segment into one whitespace-separated text span.
pub fn collect_text(raw: &str) -> Result<String> {
    let timedtext: TimedText =
        serde_json::from_str(raw).context("parse json3 caption payload")?;

    let mut out = String::new();
    for event in timedtext.events {
        let Some(segs) = event.segs else { continue };
        for seg in segs {
            let Some(s) = seg.utf8 else { continue };
            let s = s.trim();
            if s.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(s);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_across_events() {
        let raw = r#"{
            "events": [
                {"tStartMs": 0, "segs": [{"utf8": "hello"}, {"utf8": " world"}]},
                {"tStartMs": 1200},
                {"tStartMs": 2000, "segs": [{"utf8": "\n"}, {"utf8": "again"}]}
            ]
        }"#;
        assert_eq!(collect_text(raw).unwrap(), "hello world again");
    }

    #[test]
    fn empty_payload_yields_empty_text() {
        assert_eq!(collect_text("{}").unwrap(), "");
        assert_eq!(collect_text(r#"{"events": []}"#).unwrap(), "");
    }

    #[test]
    fn invalid_payload_is_an_error() {
        assert!(collect_text("<transcript/>").is_err());
    }
}
