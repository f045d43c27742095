// Snowball stemmers from rust-stemmers, keyed by language code

use std::borrow::Cow;

use rust_stemmers::Algorithm;

use super::{Stemmer, StemmerFactory};

/// A Snowball stemmer for one language.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    /// Create the stemmer for a language code, if Snowball covers it.
    pub fn for_language(lang: &str) -> Option<Self> {
        algorithm_for(lang).map(Self::new)
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer").finish_non_exhaustive()
    }
}

/// Provides a Snowball stemmer for every language the algorithm set covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowballFactory;

impl StemmerFactory for SnowballFactory {
    fn create(&self, lang: &str) -> Option<Box<dyn Stemmer>> {
        SnowballStemmer::for_language(lang).map(|s| Box::new(s) as Box<dyn Stemmer>)
    }
}

/// Map an ISO 639-1 code or English language name to a Snowball algorithm.
pub fn algorithm_for(lang: &str) -> Option<Algorithm> {
    let algorithm = match lang.trim().to_ascii_lowercase().as_str() {
        "ar" | "arabic" => Algorithm::Arabic,
        "da" | "danish" => Algorithm::Danish,
        "nl" | "dutch" => Algorithm::Dutch,
        "en" | "english" => Algorithm::English,
        "fi" | "finnish" => Algorithm::Finnish,
        "fr" | "french" => Algorithm::French,
        "de" | "german" => Algorithm::German,
        "el" | "greek" => Algorithm::Greek,
        "hu" | "hungarian" => Algorithm::Hungarian,
        "it" | "italian" => Algorithm::Italian,
        "no" | "nb" | "norwegian" => Algorithm::Norwegian,
        "pt" | "portuguese" => Algorithm::Portuguese,
        "ro" | "romanian" => Algorithm::Romanian,
        "ru" | "russian" => Algorithm::Russian,
        "es" | "spanish" => Algorithm::Spanish,
        "sv" | "swedish" => Algorithm::Swedish,
        "ta" | "tamil" => Algorithm::Tamil,
        "tr" | "turkish" => Algorithm::Turkish,
        _ => return None,
    };
    Some(algorithm)
}
