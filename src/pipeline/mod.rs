pub mod chunk;
pub mod summarize;

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::transcript;

/// Resolve the document text for a pipeline command: a local file when
/// `--from-file` is given, otherwise the fetched transcript for `source`.
pub(crate) async fn load_document(
    source: Option<&str>,
    from_file: Option<&Path>,
) -> Result<String> {
    let text = match (from_file, source) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("read transcript file {}", path.display()))?,
        (None, Some(source)) => transcript::fetch_transcript(source).await?,
        (None, None) => bail!("provide a video URL/id or --from-file"),
    };

    if text.trim().is_empty() {
        bail!("transcript is empty");
    }
    Ok(text)
}
