use canonical::CanonicalizeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a term pattern is anchored against the surrounding text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WordBoundary {
    /// `\b(?:token|stem)\b{end-half}`: only whole words match, so `cat` never
    /// highlights the front of `category`.
    #[default]
    WholeWord,
    /// `\b(?:token|stem)`: a match must start a word but may end inside it,
    /// so the stem `run` highlights the front of `runner`.
    Leading,
}

/// How the trailing whole-query pattern treats pattern metacharacters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LiteralMode {
    /// Every metacharacter in the query is escaped; `c++` matches `c++`.
    #[default]
    Escaped,
    /// The trimmed query is compiled as-is. Malformed input such as
    /// `(unclosed` fails with [`PatternError::Compile`].
    Raw,
}

/// Language used to pick the stemming algorithm and the built-in stopword
/// list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// Configuration for a [`MatchPatternBuilder`](crate::MatchPatternBuilder)
/// wired with the default collaborators.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version. Must be >= 1.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Cleaning policy applied to the raw query.
    #[serde(default)]
    pub canonical: CanonicalizeConfig,
    /// Stemmer and stopword language.
    #[serde(default)]
    pub language: Language,
    /// Anchoring of token/stem patterns.
    #[serde(default)]
    pub boundary: WordBoundary,
    /// Escaping policy of the trailing whole-query pattern.
    #[serde(default)]
    pub literal: LiteralMode,
    /// Words dropped in addition to the built-in list for `language`.
    /// Compared exactly against cleaned tokens.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    /// Validate the configuration before wiring collaborators.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.version == 0 {
            return Err(PatternError::InvalidConfig(
                "version must be >= 1".into(),
            ));
        }
        self.canonical
            .validate()
            .map_err(|err| PatternError::InvalidConfig(format!("canonical: {err}")))?;
        if let Some(word) = self
            .extra_stopwords
            .iter()
            .find(|w| w.trim().is_empty() || w.chars().any(char::is_whitespace))
        {
            return Err(PatternError::InvalidConfig(format!(
                "extra_stopwords entries must be single non-blank words, got {word:?}"
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            canonical: CanonicalizeConfig::default(),
            language: Language::default(),
            boundary: WordBoundary::default(),
            literal: LiteralMode::default(),
            extra_stopwords: Vec::new(),
        }
    }
}

/// Errors produced while building match patterns.
///
/// The first three variants are collaborator failures; the builder passes
/// them through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The text cleaner rejected the query.
    #[error("text cleaner failed: {0}")]
    Cleaner(String),
    /// The stopword filter failed.
    #[error("stopword filter failed: {0}")]
    Stopwords(String),
    /// The stemmer failed on a token.
    #[error("stemmer failed: {0}")]
    Stemmer(String),
    /// A pattern could not be compiled.
    #[error("failed to compile match pattern `{pattern}`: {reason}")]
    Compile { pattern: String, reason: String },
    /// Invalid builder configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
