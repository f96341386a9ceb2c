use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;
use url::Url;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Resolve a user-supplied video reference (a watch/short/embed URL,
/// a youtu.be link, or a bare 11-character id) to the video id.
pub fn parse_video_ref(source: &str) -> Result<String> {
    let source = source.trim();

    if VIDEO_ID_RE.is_match(source) {
        return Ok(source.to_string());
    }

    let Ok(url) = Url::parse(source) else {
        bail!("not a video URL or id: {source}");
    };

    let host = url.host_str().unwrap_or_default();
    let id = match host {
        "youtu.be" | "www.youtu.be" => url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string),
        "youtube.com" | "www.youtube.com" | "m.youtube.com" | "music.youtube.com" => {
            if url.path() == "/watch" {
                url.query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned())
            } else {
                // /shorts/{id}, /embed/{id}, /live/{id}, /v/{id}
                url.path_segments().and_then(|mut segments| match segments.next() {
                    Some("shorts" | "embed" | "live" | "v") => {
                        segments.next().map(str::to_string)
                    }
                    _ => None,
                })
            }
        }
        _ => None,
    };

    match id {
        Some(id) if VIDEO_ID_RE.is_match(&id) => Ok(id),
        _ => bail!("could not extract a video id from {source}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_video_id() {
        assert_eq!(parse_video_ref("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
    }

    #[test]
    fn parses_watch_urls() {
        assert_eq!(
            parse_video_ref("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        // extra query params after the id
        assert_eq!(
            parse_video_ref("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn parses_short_link_and_shorts() {
        assert_eq!(
            parse_video_ref("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            parse_video_ref("https://www.youtube.com/shorts/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            parse_video_ref("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn rejects_non_video_input() {
        assert!(parse_video_ref("not a url").is_err());
        assert!(parse_video_ref("https://example.com/watch?v=dQw4w9WgXcQ").is_err());
        assert!(parse_video_ref("https://www.youtube.com/playlist?list=PL123").is_err());
        assert!(parse_video_ref("tooshort").is_err());
    }
}
