use lazy_static::lazy_static;

/// First `{` through last `}` of the model's reply, greedily. Not a JSON-aware
/// scan: prose braces ahead of the payload widen the match. Kept byte-for-byte
/// compatible with the extraction the web client was built against.
pub(crate) fn json_block(text: &str) -> Option<&str> {
    lazy_static! {
        static ref JSON_BLOCK: regex::Regex = regex::Regex::new(r"(?s)\{.*\}").unwrap();
    }
    JSON_BLOCK.find(text).map(|m| m.as_str())
}

/// First line of the reply, for the identify fallback.
pub(crate) fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Stored image reference: the leading 100 characters plus an ellipsis, so
/// full image payloads never land in the record store.
pub(crate) fn truncate_image_ref(image_data: &str) -> String {
    let mut snippet: String = image_data.chars().take(100).collect();
    snippet.push_str("...");
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_block_spans_first_to_last_brace() {
        let text = "Here you go:\n{\"a\": 1}\nand also {\"b\": 2}";
        assert_eq!(json_block(text), Some("{\"a\": 1}\nand also {\"b\": 2}"));
    }

    #[test]
    fn test_json_block_handles_multiline_payload() {
        let text = "Sure!\n{\n  \"foodName\": \"Ramen\",\n  \"calories\": 550\n}\nEnjoy.";
        let block = json_block(text).unwrap();
        assert!(block.starts_with('{'));
        assert!(block.ends_with('}'));
        assert!(block.contains("Ramen"));
    }

    #[test]
    fn test_json_block_none_without_braces() {
        assert_eq!(json_block("I cannot tell what this is."), None);
        assert_eq!(json_block(""), None);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Pad Thai\nA stir-fried noodle dish"), "Pad Thai");
        assert_eq!(first_line("single line"), "single line");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_truncate_image_ref() {
        let long = format!("data:image/jpeg;base64,{}", "A".repeat(500));
        let truncated = truncate_image_ref(&long);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
        assert!(truncated.starts_with("data:image/jpeg;base64,"));

        assert_eq!(truncate_image_ref("short"), "short...");
    }
}
