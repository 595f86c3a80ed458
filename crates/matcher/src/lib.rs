//! # Query matcher (`matcher`)
//!
//! Turns a free-text search query into the ordered set of case-insensitive
//! patterns used to highlight it inside transcript text.
//!
//! ## Pipeline
//!
//! 1. Clean the query ([`TextCleaner`], default [`CanonicalCleaner`]).
//! 2. Split on whitespace and drop stopwords ([`StopwordFilter`], default
//!    [`StopwordList`]).
//! 3. Stem each remaining token ([`Stemmer`], default [`SnowballStemmer`]).
//! 4. Emit one word-boundary pattern per token matching the token or its
//!    stem, then one pattern for the trimmed query itself.
//!
//! Empty, blank and all-stopword queries produce an empty
//! [`MatchPatternSet`]; nothing gets highlighted.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::{build, PatternKind};
//!
//! let set = build("Running fast").unwrap();
//! assert_eq!(set.len(), 3);
//! assert_eq!(
//!     set.get(0).unwrap().kind(),
//!     &PatternKind::Term { token: "running".into(), stem: "run".into() },
//! );
//!
//! let out = set.highlight("She was running fast, then ran faster.");
//! assert_eq!(out.render("[", "]"), "She was [running fast], then ran faster.");
//! ```
//!
//! ## Observability
//!
//! Every build runs inside a `matcher.build` tracing span and ends with a
//! `match_patterns_built` (debug) or `match_patterns_failed` (warn) event.

pub mod collaborators;
pub mod engine;
pub mod highlight;
pub mod memo;
pub mod pattern;
pub mod stemmer;
pub mod stopwords;
pub mod types;

pub use crate::collaborators::{CanonicalCleaner, Stemmer, StopwordFilter, TextCleaner};
pub use crate::engine::{build, MatchPatternBuilder};
pub use crate::highlight::{Chunk, HighlightedText};
pub use crate::memo::MemoizedBuilder;
pub use crate::pattern::{Match, MatchPattern, MatchPatternSet, PatternKind};
pub use crate::stemmer::SnowballStemmer;
pub use crate::stopwords::StopwordList;
pub use crate::types::{Language, LiteralMode, MatchConfig, PatternError, WordBoundary};
