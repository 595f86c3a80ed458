//! Search-term highlighting for media transcripts.
//!
//! This umbrella crate stitches query canonicalization (`canonical`) and
//! pattern building (`matcher`) together and adds file-based configuration,
//! so a transcript view can go from a search box value to highlighted lines
//! with a single entry point.

pub mod config;

pub use canonical::{
    CanonicalError, CanonicalText, CanonicalizeConfig, Token, canonicalize, clean_text, tokenize,
};
pub use matcher::{
    CanonicalCleaner, Chunk, HighlightedText, Language, LiteralMode, Match, MatchConfig,
    MatchPattern, MatchPatternBuilder, MatchPatternSet, MemoizedBuilder, PatternError,
    PatternKind, SnowballStemmer, Stemmer, StopwordFilter, StopwordList, TextCleaner,
    WordBoundary, build,
};

pub use crate::config::{ConfigLoadError, HighlightConfig};

use std::path::Path;

use thiserror::Error;
use tracing::warn;

/// Errors raised while setting up highlighting from a configuration file.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("pattern builder failure: {0}")]
    Pattern(#[from] PatternError),
}

/// Wire a builder with the default collaborators described by `cfg`.
pub fn builder_from_config(cfg: &HighlightConfig) -> Result<MatchPatternBuilder, HighlightError> {
    Ok(MatchPatternBuilder::from_config(&cfg.to_match_config())?)
}

/// Load a YAML file and wire a builder from it.
pub fn builder_from_file<P: AsRef<Path>>(path: P) -> Result<MatchPatternBuilder, HighlightError> {
    let cfg = HighlightConfig::from_file(path)?;
    builder_from_config(&cfg)
}

/// Patterns for display: a failed build highlights nothing instead of
/// failing the whole transcript view.
pub fn display_patterns(builder: &MatchPatternBuilder, query: &str) -> MatchPatternSet {
    match builder.build(query) {
        Ok(set) => set,
        Err(err) => {
            warn!(error = %err, query_len = query.len(), "highlight_disabled");
            MatchPatternSet::empty()
        }
    }
}

/// Highlight `text` for `query` using the default builder.
pub fn highlight_text<'t>(query: &str, text: &'t str) -> Result<HighlightedText<'t>, PatternError> {
    Ok(build(query)?.highlight(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_text_uses_default_builder() {
        let out = highlight_text("budget", "The Budget was approved.").expect("highlight");
        assert_eq!(out.render("[", "]"), "The [Budget] was approved.");
    }

    #[test]
    fn display_patterns_falls_back_to_empty_set() {
        let builder = MatchPatternBuilder::new().with_literal_mode(LiteralMode::Raw);
        assert!(builder.build("zoning (").is_err());
        assert!(display_patterns(&builder, "zoning (").is_empty());
        assert_eq!(display_patterns(&builder, "zoning").len(), 2);
    }

    #[test]
    fn builder_from_config_honours_boundary() {
        let cfg = HighlightConfig::from_yaml(
            "version: \"1.0\"\nmatcher:\n  boundary: leading\n",
        )
        .expect("config");
        let builder = builder_from_config(&cfg).expect("builder");
        assert_eq!(builder.boundary(), WordBoundary::Leading);
        assert!(builder.build("zone").expect("build").is_match("zoned"));
    }
}
