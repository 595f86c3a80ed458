//! Built-in stopword lists and the default [`StopwordFilter`].

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::collaborators::StopwordFilter;
use crate::types::{Language, PatternError};

static ENGLISH: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "after", "all", "also", "am", "an", "and", "another", "any", "are", "as", "at",
        "be", "because", "been", "before", "being", "between", "both", "but", "by", "came", "can",
        "come", "could", "did", "do", "each", "for", "from", "get", "got", "has", "had", "he",
        "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
        "like", "make", "many", "me", "might", "more", "most", "much", "must", "my", "never",
        "now", "of", "on", "only", "or", "other", "our", "out", "over", "said", "same", "see",
        "should", "since", "some", "still", "such", "take", "than", "that", "the", "their",
        "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
        "under", "up", "very", "was", "way", "we", "well", "were", "what", "where", "which",
        "while", "who", "with", "would", "you", "your", "a", "i",
    ]
    .into_iter()
    .collect()
});

static SPANISH: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
        "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "él", "ella", "ellas",
        "ellos", "en", "entre", "era", "eran", "eres", "es", "esa", "esas", "ese", "eso", "esos",
        "esta", "estaba", "estado", "estamos", "estan", "estar", "este", "esto", "estos",
        "estoy", "fue", "fueron", "fui", "ha", "han", "hasta", "hay", "la", "las", "le", "les",
        "lo", "los", "mas", "más", "me", "mi", "mis", "mucho", "muchos", "muy", "nada", "ni",
        "no", "nos", "nosotros", "nuestra", "nuestro", "o", "os", "otra", "otros", "para",
        "pero", "poco", "por", "porque", "que", "qué", "quien", "se", "sea", "ser", "si", "sí",
        "sin", "sobre", "son", "su", "sus", "también", "te", "tiene", "todo", "todos", "tu",
        "tus", "un", "una", "uno", "unos", "y", "ya", "yo",
    ]
    .into_iter()
    .collect()
});

/// A stopword set: one built-in language list plus caller-supplied words.
///
/// Tokens are compared exactly, so the list assumes cleaned (lowercased)
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordList {
    builtin: Option<&'static HashSet<&'static str>>,
    extra: HashSet<String>,
}

impl StopwordList {
    /// A list that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        Self::for_language(Language::English)
    }

    pub fn spanish() -> Self {
        Self::for_language(Language::Spanish)
    }

    pub fn for_language(language: Language) -> Self {
        let builtin: &'static HashSet<&'static str> = match language {
            Language::English => &*ENGLISH,
            Language::Spanish => &*SPANISH,
        };
        Self {
            builtin: Some(builtin),
            extra: HashSet::new(),
        }
    }

    /// Adds words on top of the built-in list. Surrounding whitespace is
    /// trimmed and blank entries are ignored.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.builtin.is_some_and(|set| set.contains(token)) || self.extra.contains(token)
    }

    pub fn len(&self) -> usize {
        self.builtin.map_or(0, HashSet::len) + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StopwordFilter for StopwordList {
    fn filter(&self, tokens: Vec<String>) -> Result<Vec<String>, PatternError> {
        Ok(tokens.into_iter().filter(|t| !self.contains(t)).collect())
    }
}
