use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryEnvelope<'a> {
    pub summary: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TranscriptEnvelope<'a> {
    pub transcript: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChunkReport {
    pub budget: usize,
    pub total_tokens: usize,
    pub chunks: Vec<ChunkStat>,
}

#[derive(Debug, Serialize)]
pub struct ChunkStat {
    pub index: usize,
    pub tokens: usize,
    pub words: usize,
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_envelope_has_single_key() {
        let env = SummaryEnvelope { summary: "a short summary." };
        let s = serde_json::to_string(&env).unwrap();
        assert_eq!(s, r#"{"summary":"a short summary."}"#);
    }

    #[test]
    fn error_envelope_has_single_key() {
        let env = ErrorEnvelope { error: "no captions" };
        let s = serde_json::to_string(&env).unwrap();
        assert_eq!(s, r#"{"error":"no captions"}"#);
    }

    #[test]
    fn chunk_report_serializes_stats() {
        let report = ChunkReport {
            budget: 900,
            total_tokens: 12,
            chunks: vec![ChunkStat {
                index: 0,
                tokens: 12,
                words: 10,
                preview: "hello world".into(),
            }],
        };
        let s = serde_json::to_string(&report).unwrap();
        assert!(s.contains("\"budget\":900"));
        assert!(s.contains("\"chunks\""));
        assert!(s.contains("\"preview\":\"hello world\""));
    }
}
