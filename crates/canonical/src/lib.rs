//! Canonical text layer for search queries.
//!
//! Normalizes a raw query into a deterministic, versioned form before it is
//! tokenized for matching.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default, configurable)
//! - Casing and punctuation handling (lowercase, punctuation stripped)
//! - Whitespace normalization (collapses to single spaces)
//! - Tokenization with byte offsets
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same query and config,
//! same result on any machine.

mod config;
mod document;
mod error;
mod pipeline;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::document::CanonicalText;
pub use crate::error::CanonicalError;
pub use crate::pipeline::{canonicalize, clean_text};
pub use crate::token::{tokenize, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_canonicalize_default() {
        let input = "  Quick\nFOX!  Jumps   over. ";
        let cfg = CanonicalizeConfig::default();
        let out = canonicalize(input, &cfg).expect("canonicalization succeeds");

        assert_eq!(out.text, "quick fox jumps over");
        assert_eq!(out.canonical_version, cfg.version);

        let expected_tokens = vec![
            ("quick", 0usize, 5usize),
            ("fox", 6, 9),
            ("jumps", 10, 15),
            ("over", 16, 20),
        ];
        assert_eq!(out.tokens.len(), expected_tokens.len());
        for (token, (text, start, end)) in out.tokens.iter().zip(expected_tokens) {
            assert_eq!(token.text, text);
            assert_eq!(token.start, start);
            assert_eq!(token.end, end);
        }
    }

    #[test]
    fn keep_punctuation_when_disabled() {
        let cfg = CanonicalizeConfig {
            strip_punctuation: false,
            ..Default::default()
        };
        let out = canonicalize("Hello, world! It's fun.", &cfg).expect("canonicalization succeeds");
        assert_eq!(out.text, "hello, world! it's fun.");
    }

    #[test]
    fn punctuation_splits_tokens() {
        let out = canonicalize("It's 100% fun.", &CanonicalizeConfig::default())
            .expect("canonicalization succeeds");
        let texts: Vec<&str> = out.token_texts().collect();
        assert_eq!(texts, vec!["it", "s", "100", "fun"]);
    }

    #[test]
    fn symbols_are_not_punctuation() {
        let out = clean_text("C++ costs $5", &CanonicalizeConfig::default())
            .expect("canonicalization succeeds");
        assert_eq!(out, "c++ costs $5");
    }

    #[test]
    fn unicode_equivalence_nfkc() {
        let cfg = CanonicalizeConfig::default();
        let composed = clean_text("Caf\u{00E9}", &cfg).expect("composed");
        let decomposed = clean_text("Cafe\u{0301}", &cfg).expect("decomposed");
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn disable_unicode_normalization() {
        let cfg = CanonicalizeConfig {
            normalize_unicode: false,
            ..Default::default()
        };
        let out = clean_text("Cafe\u{0301}", &cfg).expect("canonicalization succeeds");
        assert_eq!(out, "cafe\u{0301}");
    }

    #[test]
    fn preserve_case_when_disabled() {
        let cfg = CanonicalizeConfig {
            lowercase: false,
            ..Default::default()
        };
        let out = clean_text("Quick FOX", &cfg).expect("canonicalization succeeds");
        assert_eq!(out, "Quick FOX");
    }

    #[test]
    fn blank_and_punctuation_only_inputs_are_empty() {
        let cfg = CanonicalizeConfig::default();
        for input in ["", "   ", "\t\n", "?!...", " -- "] {
            let out = canonicalize(input, &cfg).expect("canonicalization succeeds");
            assert!(out.is_empty(), "{input:?} should canonicalize to nothing");
            assert!(out.tokens.is_empty());
        }
    }

    #[test]
    fn token_offsets_stable_for_non_bmp() {
        let out = canonicalize(" a\u{10348}b  c ", &CanonicalizeConfig::default())
            .expect("canonicalization succeeds");
        let expected = vec![
            Token {
                text: "a\u{10348}b".to_string(),
                start: 0,
                end: "a\u{10348}b".len(),
            },
            Token {
                text: "c".to_string(),
                start: "a\u{10348}b ".len(),
                end: "a\u{10348}b c".len(),
            },
        ];
        assert_eq!(out.tokens, expected);
    }

    #[test]
    fn canonical_tokens_match_whitespace_tokenizer() {
        let out = canonicalize("Running,  the quick-fox", &CanonicalizeConfig::default())
            .expect("canonicalization succeeds");
        assert_eq!(tokenize(&out.text), out.tokens);
    }

    #[test]
    fn clean_text_matches_canonical_text() {
        let configs = [
            CanonicalizeConfig::default(),
            CanonicalizeConfig {
                strip_punctuation: false,
                lowercase: false,
                ..Default::default()
            },
        ];
        for cfg in &configs {
            for input in ["", " ?! ", "  Quick\nFOX!  Jumps ", "C++ costs $5", "Cafe\u{0301} \u{1F600}!"] {
                let full = canonicalize(input, cfg).expect("canonicalize");
                assert_eq!(clean_text(input, cfg).expect("clean"), full.text, "{input:?}");
            }
        }
        assert!(matches!(
            clean_text("x", &CanonicalizeConfig { version: 0, ..Default::default() }),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn invalid_config_version_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            canonicalize("content", &cfg),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn canonicalize_is_deterministic() {
        let cfg = CanonicalizeConfig::default();
        for text in ["", "hello world", "こんにちは 世界", "emoji \u{1f600}!"] {
            assert_eq!(
                canonicalize(text, &cfg).expect("first"),
                canonicalize(text, &cfg).expect("second")
            );
        }
    }
}
