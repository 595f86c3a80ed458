use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::CanonicalizeConfig;
use crate::document::CanonicalText;
use crate::error::CanonicalError;
use crate::token::Token;

/// Main entry point. Normalizes a raw query and splits it into tokens.
///
/// Empty or punctuation-only input is not an error: it yields an empty
/// [`CanonicalText`].
pub fn canonicalize(input: &str, cfg: &CanonicalizeConfig) -> Result<CanonicalText, CanonicalError> {
    let writer = run(input, cfg, CanonicalWriter::with_tokens)?;
    Ok(writer.finish(cfg.version))
}

/// Returns only the canonical text. Token offsets are never recorded, so
/// this is the cheaper path for callers that re-split the text themselves.
pub fn clean_text(input: &str, cfg: &CanonicalizeConfig) -> Result<String, CanonicalError> {
    let writer = run(input, cfg, CanonicalWriter::text_only)?;
    Ok(writer.text)
}

fn run(
    input: &str,
    cfg: &CanonicalizeConfig,
    make_writer: fn(usize) -> CanonicalWriter,
) -> Result<CanonicalWriter, CanonicalError> {
    cfg.validate()?;

    // Normalization can change character boundaries, so it runs first.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let mut writer = make_writer(normalized.len());
    for grapheme in normalized.graphemes(true) {
        // Lowercasing can expand one character into several (e.g. 'İ').
        if cfg.lowercase {
            for ch in grapheme.chars().flat_map(char::to_lowercase) {
                writer.push(ch, cfg);
            }
        } else {
            for ch in grapheme.chars() {
                writer.push(ch, cfg);
            }
        }
    }

    writer.close_token();
    Ok(writer)
}

/// Accumulates canonical text while collapsing delimiters. Token offsets
/// are tracked only when `tokens` is present.
struct CanonicalWriter {
    text: String,
    tokens: Option<Vec<Token>>,
    pending_space: bool,
    token_start: Option<usize>,
}

impl CanonicalWriter {
    fn with_tokens(len: usize) -> Self {
        Self {
            tokens: Some(Vec::with_capacity(len / 4 + 1)),
            ..Self::text_only(len)
        }
    }

    fn text_only(len: usize) -> Self {
        Self {
            text: String::with_capacity(len),
            tokens: None,
            pending_space: false,
            token_start: None,
        }
    }

    fn push(&mut self, ch: char, cfg: &CanonicalizeConfig) {
        let is_delim = ch.is_whitespace() || (cfg.strip_punctuation && ch.is_punctuation());
        if is_delim {
            self.close_token();
            // Leading delimiters never produce a space.
            if !self.text.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        if self.pending_space {
            self.text.push(' ');
            self.pending_space = false;
            self.token_start = Some(self.text.len());
        } else if self.token_start.is_none() {
            self.token_start = Some(self.text.len());
        }
        self.text.push(ch);
    }

    fn close_token(&mut self) {
        let start = self.token_start.take();
        if let (Some(tokens), Some(start)) = (self.tokens.as_mut(), start) {
            if start < self.text.len() {
                let end = self.text.len();
                tokens.push(Token {
                    text: self.text[start..end].to_string(),
                    start,
                    end,
                });
            }
        }
    }

    fn finish(self, canonical_version: u32) -> CanonicalText {
        CanonicalText {
            text: self.text,
            tokens: self.tokens.unwrap_or_default(),
            canonical_version,
        }
    }
}
