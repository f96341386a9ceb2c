use std::sync::LazyLock;

use regex::Regex;

// Cue markers like [Music], [Applause], [Laughter] carry no transcript text.
static CUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

/// Strip caption cue markers and collapse all whitespace runs to single
/// spaces. The exact marker set is heuristic; anything bracketed goes.
pub fn clean_caption_text(text: &str) -> String {
    let without_cues = CUE_RE.replace_all(text, " ");
    without_cues
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cue_markers() {
        assert_eq!(
            clean_caption_text("[Music] welcome back [Applause] everyone"),
            "welcome back everyone"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            clean_caption_text("one\n two\t\tthree   four"),
            "one two three four"
        );
    }

    #[test]
    fn cue_only_input_becomes_empty() {
        assert_eq!(clean_caption_text("[Music]  [Applause]"), "");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(clean_caption_text("plain text"), "plain text");
    }
}
