//! Strategy traits consumed by the pattern builder.
//!
//! Each trait has a single method so implementations can be swapped per
//! locale. Plain closures implement them too, which is handy for tests and
//! one-off policies:
//!
//! ```rust
//! use matcher::{MatchPatternBuilder, PatternError};
//!
//! let builder = MatchPatternBuilder::new()
//!     .with_stemmer(|token: &str| -> Result<String, PatternError> {
//!         Ok(token.trim_end_matches('s').to_string())
//!     });
//! let set = builder.build("cats").unwrap();
//! assert!(set.is_match("one cat"));
//! ```

use canonical::{clean_text, CanonicalizeConfig};

use crate::types::PatternError;

/// Normalizes case, punctuation and whitespace of a raw query.
pub trait TextCleaner: Send + Sync {
    fn clean(&self, raw: &str) -> Result<String, PatternError>;
}

/// Removes language stopwords, preserving the relative order of the rest.
pub trait StopwordFilter: Send + Sync {
    fn filter(&self, tokens: Vec<String>) -> Result<Vec<String>, PatternError>;
}

/// Returns the linguistic root of a single token.
pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> Result<String, PatternError>;
}

impl<F> TextCleaner for F
where
    F: Fn(&str) -> Result<String, PatternError> + Send + Sync,
{
    fn clean(&self, raw: &str) -> Result<String, PatternError> {
        self(raw)
    }
}

impl<F> StopwordFilter for F
where
    F: Fn(Vec<String>) -> Result<Vec<String>, PatternError> + Send + Sync,
{
    fn filter(&self, tokens: Vec<String>) -> Result<Vec<String>, PatternError> {
        self(tokens)
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> Result<String, PatternError> + Send + Sync,
{
    fn stem(&self, token: &str) -> Result<String, PatternError> {
        self(token)
    }
}

/// Default [`TextCleaner`] backed by the canonical query pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalCleaner {
    cfg: CanonicalizeConfig,
}

impl CanonicalCleaner {
    pub fn new(cfg: CanonicalizeConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &CanonicalizeConfig {
        &self.cfg
    }
}

impl TextCleaner for CanonicalCleaner {
    fn clean(&self, raw: &str) -> Result<String, PatternError> {
        clean_text(raw, &self.cfg).map_err(|err| PatternError::Cleaner(err.to_string()))
    }
}
