// Word-level chunking against a model-token budget.

use anyhow::Result;

use crate::tokenizer::Tokenize;

/// Split `text` on whitespace and pack words, in order, into chunks whose
/// token count stays within `max_tokens`.
///
/// The budget is a soft target: a single word longer than the budget still
/// becomes its own chunk rather than being dropped or split mid-word. Every
/// word lands in exactly one chunk, so rejoining the chunks reconstructs the
/// document's words in original order.
pub fn chunk_words(text: &str, max_tokens: usize, tok: &dyn Tokenize) -> Result<Vec<String>> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let token_len = tok.count_tokens(word)?;
        if current.is_empty() || current_len + token_len <= max_tokens {
            current.push(word);
            current_len += token_len;
        } else {
            chunks.push(current.join(" "));
            current = vec![word];
            current_len = token_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::testing::WordTokenizer;

    // one token per character; lets a single word blow the budget
    struct CharTokenizer;

    impl Tokenize for CharTokenizer {
        fn count_tokens(&self, text: &str) -> Result<usize> {
            Ok(text.chars().count())
        }

        fn truncate_to(&self, text: &str, max_tokens: usize) -> Result<String> {
            Ok(text.chars().take(max_tokens).collect())
        }
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        let chunks = chunk_words("", 900, &WordTokenizer).unwrap();
        assert!(chunks.is_empty());

        let chunks = chunk_words("   \n\t ", 900, &WordTokenizer).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = chunk_words("one two three", 900, &WordTokenizer).unwrap();
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn chunks_partition_the_document() {
        let words: Vec<String> = (0..2000).map(|i| format!("w{i}")).collect();
        let text = words.join(" ");

        let chunks = chunk_words(&text, 900, &WordTokenizer).unwrap();

        // rejoined chunks re-split into exactly the original word sequence
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect();
        assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());

        // budget respected for every chunk
        for chunk in &chunks {
            assert!(chunk.split_whitespace().count() <= 900);
        }
        assert_eq!(chunks.len(), 3); // 900 + 900 + 200
    }

    #[test]
    fn oversized_word_becomes_its_own_chunk() {
        let text = "ab supercalifragilistic cd";
        let chunks = chunk_words(text, 5, &CharTokenizer).unwrap();
        assert_eq!(chunks, vec!["ab", "supercalifragilistic", "cd"]);
    }

    #[test]
    fn oversized_leading_word_does_not_create_an_empty_chunk() {
        let text = "supercalifragilistic ab";
        let chunks = chunk_words(text, 5, &CharTokenizer).unwrap();
        assert_eq!(chunks, vec!["supercalifragilistic", "ab"]);
    }

    #[test]
    fn chunking_is_deterministic() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let a = chunk_words(text, 3, &WordTokenizer).unwrap();
        let b = chunk_words(text, 3, &WordTokenizer).unwrap();
        assert_eq!(a, b);
    }
}
