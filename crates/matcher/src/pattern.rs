use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::highlight::HighlightedText;
use crate::types::{LiteralMode, PatternError, WordBoundary};

/// What a [`MatchPattern`] was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternKind {
    /// A retained query token together with its stem.
    Term { token: String, stem: String },
    /// The trimmed original query, matched anywhere.
    Literal { text: String },
}

/// A compiled, case-insensitive highlight pattern.
///
/// Two patterns are equal when they were built from the same input and
/// compiled to the same expression.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    kind: PatternKind,
    regex: Regex,
}

impl MatchPattern {
    pub(crate) fn term(token: &str, stem: &str, boundary: WordBoundary) -> Result<Self, PatternError> {
        let mut alternatives = regex::escape(token);
        if !stem.is_empty() && stem != token {
            alternatives.push('|');
            alternatives.push_str(&regex::escape(stem));
        }
        let source = match boundary {
            // A half boundary still closes after symbols like `c++` or `$5`.
            WordBoundary::WholeWord => format!(r"\b(?:{alternatives})\b{{end-half}}"),
            WordBoundary::Leading => format!(r"\b(?:{alternatives})"),
        };
        Ok(Self {
            kind: PatternKind::Term {
                token: token.to_string(),
                stem: stem.to_string(),
            },
            regex: compile(source)?,
        })
    }

    pub(crate) fn literal(text: &str, mode: LiteralMode) -> Result<Self, PatternError> {
        let source = match mode {
            LiteralMode::Escaped => regex::escape(text),
            LiteralMode::Raw => text.to_string(),
        };
        Ok(Self {
            kind: PatternKind::Literal {
                text: text.to_string(),
            },
            regex: compile(source)?,
        })
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, PatternKind::Literal { .. })
    }

    /// The expression source, without the case-insensitivity flag.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for MatchPattern {}

fn compile(source: String) -> Result<Regex, PatternError> {
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|err| PatternError::Compile {
            pattern: source,
            reason: err.to_string(),
        })
}

/// One occurrence of a pattern, as byte offsets into the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    /// Index of the pattern in its [`MatchPatternSet`].
    pub pattern_index: usize,
}

/// Ordered patterns for one query: a term pattern per retained token, then
/// the whole-query literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPatternSet {
    patterns: Vec<MatchPattern>,
}

impl MatchPatternSet {
    pub(crate) fn new(patterns: Vec<MatchPattern>) -> Self {
        Self { patterns }
    }

    /// The set produced for degenerate queries; highlights nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MatchPattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchPattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[MatchPattern] {
        &self.patterns
    }

    /// Token/stem patterns in token order.
    pub fn term_patterns(&self) -> impl Iterator<Item = &MatchPattern> + '_ {
        self.patterns.iter().filter(|p| !p.is_literal())
    }

    /// Number of token/stem patterns.
    pub fn term_count(&self) -> usize {
        self.term_patterns().count()
    }

    /// The trailing whole-query pattern, if present.
    pub fn literal(&self) -> Option<&MatchPattern> {
        self.patterns.last().filter(|p| p.is_literal())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// All non-empty matches of every pattern, ordered by start offset then
    /// pattern index. Matches from different patterns may overlap.
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .patterns
            .iter()
            .enumerate()
            .flat_map(|(pattern_index, pattern)| {
                pattern.regex.find_iter(text).map(move |m| Match {
                    start: m.start(),
                    end: m.end(),
                    pattern_index,
                })
            })
            .filter(|m| m.start < m.end)
            .collect();
        matches.sort_by_key(|m| (m.start, m.pattern_index));
        matches
    }

    /// Splits `text` into highlighted and plain chunks.
    pub fn highlight<'t>(&self, text: &'t str) -> HighlightedText<'t> {
        HighlightedText::from_matches(text, &self.find_matches(text))
    }
}

impl<'a> IntoIterator for &'a MatchPatternSet {
    type Item = &'a MatchPattern;
    type IntoIter = std::slice::Iter<'a, MatchPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
