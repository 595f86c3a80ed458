use std::fmt;

use rust_stemmers::{Algorithm, Stemmer as Snowball};

use crate::collaborators::Stemmer;
use crate::types::{Language, PatternError};

impl Language {
    fn algorithm(self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::Spanish => Algorithm::Spanish,
        }
    }
}

/// Default [`Stemmer`] running the Snowball algorithm for one language.
pub struct SnowballStemmer {
    language: Language,
    inner: Snowball,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: Snowball::create(language.algorithm()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> Result<String, PatternError> {
        Ok(self.inner.stem(token).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_stems_inflections() {
        let stemmer = SnowballStemmer::default();
        for (word, root) in [
            ("running", "run"),
            ("foxes", "fox"),
            ("jumping", "jump"),
            ("quick", "quick"),
            ("cat", "cat"),
        ] {
            assert_eq!(stemmer.stem(word).expect("stem"), root, "stem of {word}");
        }
    }

    #[test]
    fn spanish_stemmer_differs_from_english() {
        let stemmer = SnowballStemmer::new(Language::Spanish);
        assert_eq!(stemmer.language(), Language::Spanish);
        assert_eq!(stemmer.stem("gatos").expect("stem"), "gat");
        assert_eq!(SnowballStemmer::default().stem("gatos").expect("stem"), "gato");
    }
}
