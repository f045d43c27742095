// Stemming capability consumed by the dictionary and the scanner

#[cfg(feature = "snowball")]
pub mod snowball;

use std::borrow::Cow;

#[cfg(feature = "snowball")]
pub use snowball::{SnowballFactory, SnowballStemmer};

/// Reduces an inflected word to a canonical stem.
///
/// Implementations must be pure and deterministic: the dictionary stores
/// `stem(entry)` at insertion time and the scanner later compares against
/// `stem(word)`, so the same input has to give the same stem every time.
pub trait Stemmer: Send + Sync {
    /// Stem a lower-case, letters-only word.
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Produces the stemmer for a language code.
///
/// Returning `None` is a valid answer: the language is then matched on exact
/// surface forms only.
pub trait StemmerFactory: Send + Sync {
    fn create(&self, lang: &str) -> Option<Box<dyn Stemmer>>;
}

impl<F> StemmerFactory for F
where
    F: Fn(&str) -> Option<Box<dyn Stemmer>> + Send + Sync,
{
    fn create(&self, lang: &str) -> Option<Box<dyn Stemmer>> {
        self(lang)
    }
}

/// Factory that never provides a stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStemming;

impl StemmerFactory for NoStemming {
    fn create(&self, _lang: &str) -> Option<Box<dyn Stemmer>> {
        None
    }
}

/// Factory used by [`Censor::new`](crate::Censor::new).
pub fn default_factory() -> Box<dyn StemmerFactory> {
    #[cfg(feature = "snowball")]
    {
        Box::new(SnowballFactory)
    }
    #[cfg(not(feature = "snowball"))]
    {
        Box::new(NoStemming)
    }
}
