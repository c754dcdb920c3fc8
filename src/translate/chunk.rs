/// Splits `text` on whitespace into chunks of at most `limit` characters
/// each (single-space joined). A word longer than `limit` becomes a chunk of
/// its own. Never returns empty chunks.
pub fn split_into_chunks(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if !current.is_empty() && current_len + 1 + len > limit {
            chunks.push(current.join(" "));
            current.clear();
            current_len = 0;
        }
        current_len += if current.is_empty() { len } else { len + 1 };
        current.push(word);
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_into_chunks("a b  c", 100), vec!["a b c"]);
    }

    #[test]
    fn test_chunks_respect_limit_and_rejoin() {
        let words: Vec<String> = (0..2000).map(|i| format!("word{i}")).collect();
        let text = words.join("\n ");
        let chunks = split_into_chunks(&text, 4500);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 4500));
        assert_eq!(chunks.join(" "), words.join(" "));
    }

    #[test]
    fn test_oversize_word_stands_alone() {
        let long = "x".repeat(12);
        let chunks = split_into_chunks(&format!("ab {long} cd"), 5);
        assert_eq!(chunks, vec!["ab".to_string(), long, "cd".to_string()]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let chunks = split_into_chunks("摘要 引言", 5);
        assert_eq!(chunks, vec!["摘要 引言"]);
    }

    #[test]
    fn test_blank_text_has_no_chunks() {
        assert!(split_into_chunks("  \n ", 10).is_empty());
    }
}
