// Censor: top-level handle owning every language dictionary.
//
// Design notes:
// - Dictionaries are created lazily, on the first word added for a language
//   code. The stemmer for a new language is asked from the factory once, at
//   that moment; a later `register_language` cannot swap it out because the
//   stored entries were normalized with it.
// - Scanning takes `&self` and allocates its own trie cursors, so one
//   populated Censor can serve many threads at once. Mutation needs `&mut
//   self`; callers that mix the two wrap the Censor in a lock.

use std::borrow::Cow;

use hashbrown::HashMap;
use ugu_core::{DEFAULT_MASK, WordBounds};

use crate::dictionary::Dictionary;
use crate::scan;
use crate::stemmer::{self, Stemmer, StemmerFactory};

/// Options affecting the censored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensorOptions {
    /// Replacement for every code point of a censored span.
    pub mask: char,
}

impl Default for CensorOptions {
    fn default() -> Self {
        Self { mask: DEFAULT_MASK }
    }
}

/// Per-language word censor.
pub struct Censor {
    dictionaries: HashMap<String, Dictionary>,
    stemmers: Box<dyn StemmerFactory>,
    options: CensorOptions,
}

impl Censor {
    /// Create an empty censor using the default stemmer factory.
    ///
    /// With the `snowball` feature every Snowball-covered language gets a
    /// stemmer; otherwise no language does.
    pub fn new() -> Self {
        Self::build(stemmer::default_factory(), CensorOptions::default())
    }

    /// Create an empty censor that asks `factory` for each language's stemmer.
    pub fn with_stemmer_factory(factory: impl StemmerFactory + 'static) -> Self {
        Self::build(Box::new(factory), CensorOptions::default())
    }

    pub fn with_options(mut self, options: CensorOptions) -> Self {
        self.options = options;
        self
    }

    fn build(stemmers: Box<dyn StemmerFactory>, options: CensorOptions) -> Self {
        Self {
            dictionaries: HashMap::new(),
            stemmers,
            options,
        }
    }

    pub fn options(&self) -> CensorOptions {
        self.options
    }

    pub fn set_mask(&mut self, mask: char) {
        self.options.mask = mask;
    }

    // =========================================================================
    // Dictionary management
    // =========================================================================

    /// Create the dictionary for `lang` with an explicit stemmer.
    ///
    /// Only takes effect for a language without a dictionary; returns `false`
    /// and leaves the existing dictionary alone otherwise.
    pub fn register_language(&mut self, lang: &str, stemmer: Option<Box<dyn Stemmer>>) -> bool {
        if self.dictionaries.contains_key(lang) {
            return false;
        }
        tracing::debug!(lang, stemmer = stemmer.is_some(), "registering language");
        self.dictionaries
            .insert(lang.to_string(), Dictionary::new(stemmer));
        true
    }

    /// Add one word to the dictionary for `lang`.
    ///
    /// The word is reduced to lower-case letters and, when the language has a
    /// stemmer, to its stem before insertion.
    pub fn add_word(&mut self, word: &str, lang: &str) {
        self.dictionary_mut(lang).insert(word);
    }

    /// Add every word of `words` to the dictionary for `lang`.
    pub fn add_words<I, S>(&mut self, words: I, lang: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = self.dictionary_mut(lang);
        let mut added = 0usize;
        for word in words {
            if dictionary.insert(word.as_ref()) {
                added += 1;
            }
        }
        tracing::debug!(lang, added, total = dictionary.len(), "added words");
    }

    /// Remove a word from the dictionary for `lang`.
    ///
    /// Unknown languages and absent words are ignored.
    pub fn remove_word(&mut self, word: &str, lang: &str) {
        if let Some(dictionary) = self.dictionaries.get_mut(lang) {
            dictionary.remove(word);
        }
    }

    pub fn dictionary(&self, lang: &str) -> Option<&Dictionary> {
        self.dictionaries.get(lang)
    }

    /// Language codes that have a dictionary.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    fn dictionary_mut(&mut self, lang: &str) -> &mut Dictionary {
        let stemmers = &self.stemmers;
        self.dictionaries.entry_ref(lang).or_insert_with(|| {
            let stemmer = stemmers.create(lang);
            tracing::debug!(lang, stemmer = stemmer.is_some(), "creating dictionary");
            Dictionary::new(stemmer)
        })
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Mask every dictionary word of `lang` found in `text`.
    ///
    /// Returns the censored text and whether anything was masked. The output
    /// always has as many code points as `text`. When nothing is masked, or
    /// `lang` has no dictionary, `text` is returned as is.
    pub fn censor_text<'a>(&self, text: &'a str, lang: &str) -> (Cow<'a, str>, bool) {
        let Some(dictionary) = self.dictionaries.get(lang) else {
            return (Cow::Borrowed(text), false);
        };

        let chars: Vec<char> = text.chars().collect();
        let starts = scan::find_candidate_starts(dictionary.trie(), &chars);
        if starts.is_empty() {
            return (Cow::Borrowed(text), false);
        }
        let bounds = scan::find_word_bounds(dictionary.trie(), &chars, &starts);

        let (output, censored) = scan::redact(text, &chars, &bounds, self.options.mask, |b| {
            is_censored(dictionary, b)
        });
        tracing::trace!(
            lang,
            candidates = starts.len(),
            bounds = bounds.len(),
            censored,
            "scanned text"
        );
        (output, censored)
    }

    /// Pass 1 only: offsets where a match may start.
    pub fn candidate_starts(&self, text: &str, lang: &str) -> Vec<usize> {
        let Some(dictionary) = self.dictionaries.get(lang) else {
            return Vec::new();
        };
        let chars: Vec<char> = text.chars().collect();
        scan::find_candidate_starts(dictionary.trie(), &chars)
    }

    /// Passes 1 and 2: every resolved span, before overlap removal and
    /// before the censorship decision.
    pub fn word_bounds(&self, text: &str, lang: &str) -> Vec<WordBounds> {
        let Some(dictionary) = self.dictionaries.get(lang) else {
            return Vec::new();
        };
        let chars: Vec<char> = text.chars().collect();
        let starts = scan::find_candidate_starts(dictionary.trie(), &chars);
        scan::find_word_bounds(dictionary.trie(), &chars, &starts)
    }

    /// Whether `bounds` would be masked for `lang`.
    pub fn is_censored(&self, bounds: &WordBounds, lang: &str) -> bool {
        self.dictionaries
            .get(lang)
            .is_some_and(|dictionary| is_censored(dictionary, bounds))
    }
}

impl Default for Censor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Censor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Censor")
            .field("dictionaries", &self.dictionaries)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A span is censored when its letters are exactly a stored entry, or when
/// their stem is.
fn is_censored(dictionary: &Dictionary, bounds: &WordBounds) -> bool {
    bounds.is_exact() || dictionary.contains_stem_of(&bounds.word)
}
