use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use canonical::tokenize;
use once_cell::sync::Lazy;
use tracing::{debug, warn, Level};

use crate::collaborators::{CanonicalCleaner, Stemmer, StopwordFilter, TextCleaner};
use crate::pattern::{MatchPattern, MatchPatternSet};
use crate::stemmer::SnowballStemmer;
use crate::stopwords::StopwordList;
use crate::types::{LiteralMode, MatchConfig, PatternError, WordBoundary};


static DEFAULT_BUILDER: Lazy<MatchPatternBuilder> = Lazy::new(MatchPatternBuilder::new);

/// Builds match patterns with the process-wide default builder (English,
/// whole-word anchoring, escaped literal).
pub fn build(query: &str) -> Result<MatchPatternSet, PatternError> {
    DEFAULT_BUILDER.build(query)
}

/// Turns a free-text query into the ordered patterns used to highlight it.
///
/// The builder holds no mutable state; one instance can serve any number of
/// threads.
#[derive(Clone)]
pub struct MatchPatternBuilder {
    cleaner: Arc<dyn TextCleaner>,
    stopwords: Arc<dyn StopwordFilter>,
    stemmer: Arc<dyn Stemmer>,
    boundary: WordBoundary,
    literal: LiteralMode,
}

impl MatchPatternBuilder {
    /// Builder wired with the default English collaborators.
    pub fn new() -> Self {
        Self {
            cleaner: Arc::new(CanonicalCleaner::default()),
            stopwords: Arc::new(StopwordList::english()),
            stemmer: Arc::new(SnowballStemmer::default()),
            boundary: WordBoundary::default(),
            literal: LiteralMode::default(),
        }
    }

    /// Builder wired with the default collaborators as described by `cfg`.
    pub fn from_config(cfg: &MatchConfig) -> Result<Self, PatternError> {
        cfg.validate()?;
        Ok(Self {
            cleaner: Arc::new(CanonicalCleaner::new(cfg.canonical.clone())),
            stopwords: Arc::new(
                StopwordList::for_language(cfg.language).with_words(&cfg.extra_stopwords),
            ),
            stemmer: Arc::new(SnowballStemmer::new(cfg.language)),
            boundary: cfg.boundary,
            literal: cfg.literal,
        })
    }

    pub fn with_cleaner(mut self, cleaner: impl TextCleaner + 'static) -> Self {
        self.cleaner = Arc::new(cleaner);
        self
    }

    pub fn with_stopwords(mut self, stopwords: impl StopwordFilter + 'static) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }

    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Arc::new(stemmer);
        self
    }

    pub fn with_boundary(mut self, boundary: WordBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_literal_mode(mut self, literal: LiteralMode) -> Self {
        self.literal = literal;
        self
    }

    pub fn boundary(&self) -> WordBoundary {
        self.boundary
    }

    pub fn literal_mode(&self) -> LiteralMode {
        self.literal
    }

    /// Builds the pattern set for `query`.
    ///
    /// Empty, blank, punctuation-only and all-stopword queries yield an
    /// empty set. Collaborator errors are returned unchanged.
    pub fn build(&self, query: &str) -> Result<MatchPatternSet, PatternError> {
        let start = Instant::now();
        let span = tracing::span!(Level::DEBUG, "matcher.build", query_len = query.len());
        let _guard = span.enter();

        match self.build_inner(query) {
            Ok(set) => {
                debug!(
                    token_count = set.term_count(),
                    pattern_count = set.len(),
                    elapsed_micros = start.elapsed().as_micros(),
                    "match_patterns_built"
                );
                Ok(set)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    elapsed_micros = start.elapsed().as_micros(),
                    "match_patterns_failed"
                );
                Err(err)
            }
        }
    }

    fn build_inner(&self, query: &str) -> Result<MatchPatternSet, PatternError> {
        let cleaned = self.cleaner.clean(query)?;
        let tokens: Vec<String> = tokenize(&cleaned).into_iter().map(|t| t.text).collect();
        let tokens = self.stopwords.filter(tokens)?;
        if cleaned.is_empty() || tokens.is_empty() {
            return Ok(MatchPatternSet::empty());
        }

        // stems[i] belongs to tokens[i]
        let stems = tokens
            .iter()
            .map(|token| self.stemmer.stem(token))
            .collect::<Result<Vec<_>, _>>()?;

        let mut patterns = Vec::with_capacity(tokens.len() + 1);
        for (token, stem) in tokens.iter().zip(&stems) {
            patterns.push(MatchPattern::term(token, stem, self.boundary)?);
        }

        let trimmed = query.trim();
        if !trimmed.is_empty() {
            patterns.push(MatchPattern::literal(trimmed, self.literal)?);
        }

        Ok(MatchPatternSet::new(patterns))
    }
}

impl Default for MatchPatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchPatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchPatternBuilder")
            .field("boundary", &self.boundary)
            .field("literal", &self.literal)
            .finish_non_exhaustive()
    }
}
