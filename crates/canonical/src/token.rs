use serde::{Deserialize, Serialize};

/// A token with its UTF-8 byte offsets in the canonical text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the canonical text.
    pub start: usize,
    /// Byte offset (exclusive) in the canonical text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits text on Unicode whitespace and records byte offsets.
///
/// Offsets index into `text` itself, so callers can slice the original
/// string with them. Blank input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    let base = text.as_ptr() as usize;
    text.split_whitespace()
        .map(|word| {
            // `word` is a sub-slice of `text`.
            let start = word.as_ptr() as usize - base;
            Token {
                text: word.to_string(),
                start,
                end: start + word.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_do_not_produce_empty_tokens() {
        let tokens = tokenize("  quick \t\n fox ");
        let texts: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        assert_eq!(texts, vec!["quick", "fox"]);
        assert_eq!((tokens[0].start, tokens[0].end), (2, 7));
        assert_eq!((tokens[1].start, tokens[1].end), (11, 14));
    }

    #[test]
    fn offsets_slice_back_to_multibyte_words() {
        let text = "caf\u{00E9}\u{3000}ni\u{00F1}o \u{1F600}";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 3);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens[1].text, "ni\u{00F1}o");
        assert_eq!(tokens[1].start, "caf\u{00E9}\u{3000}".len());
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \u{00A0}\t").is_empty());
    }
}
