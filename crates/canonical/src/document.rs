//! Output type of the canonical query pipeline.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// The canonical form of a search query.
///
/// For a fixed [`CanonicalizeConfig`](crate::CanonicalizeConfig) version and
/// input, every field is deterministic.
///
/// ```rust
/// use canonical::{canonicalize, CanonicalizeConfig};
///
/// let out = canonicalize("  The QUICK, brown fox!", &CanonicalizeConfig::default()).unwrap();
/// assert_eq!(out.text, "the quick brown fox");
/// assert_eq!(out.tokens.len(), 4);
/// assert_eq!(out.tokens[1].text, "quick");
/// assert_eq!((out.tokens[1].start, out.tokens[1].end), (4, 9));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalText {
    /// Text after normalization, casing, punctuation and whitespace policies.
    /// Empty when the input had no token characters left.
    pub text: String,

    /// Tokens with UTF-8 byte offsets into `text`.
    pub tokens: Vec<Token>,

    /// Configuration version used to produce this value.
    pub canonical_version: u32,
}

impl CanonicalText {
    /// True when nothing survived canonicalization.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates the token strings in order.
    pub fn token_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|t| t.text.as_str())
    }
}
