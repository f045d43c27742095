// Per-language dictionary: a trie of normalized entries plus an optional stemmer

use std::borrow::Cow;

use ugu_core::character::lowercase_word;
use ugu_trie::Trie;

use crate::stemmer::Stemmer;

/// Word set for a single language.
///
/// Entries are normalized before they reach the trie: lower-cased, then
/// stemmed when the language has a stemmer. Entries containing anything but
/// letters are rejected. One stored stem covers
/// every inflected form the stemmer maps onto it.
pub struct Dictionary {
    trie: Trie,
    stemmer: Option<Box<dyn Stemmer>>,
}

impl Dictionary {
    pub fn new(stemmer: Option<Box<dyn Stemmer>>) -> Self {
        Self {
            trie: Trie::new(),
            stemmer,
        }
    }

    /// The normalized form under which `word` is stored, or `None` if it
    /// cannot be stored.
    pub fn normalize(&self, word: &str) -> Option<String> {
        let lower = lowercase_word(word)?;
        let entry = match &self.stemmer {
            Some(stemmer) => stemmer.stem(&lower).into_owned(),
            None => lower,
        };
        (!entry.is_empty()).then_some(entry)
    }

    /// Add an entry. Returns `true` if its normalized form was new.
    ///
    /// Empty entries and entries with non-letters are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(entry) = self.normalize(word) else {
            tracing::debug!(word, "skipping entry that is not a letters-only word");
            return false;
        };
        self.trie.insert(&entry)
    }

    /// Remove an entry. Absent entries are a no-op returning `false`.
    pub fn remove(&mut self, word: &str) -> bool {
        self.normalize(word).is_some_and(|entry| self.trie.remove(&entry))
    }

    /// Check whether the stem of `word` is a stored entry.
    ///
    /// `word` must already be letters-only and lower-case. Always `false`
    /// for a language without a stemmer: exact forms are matched by the
    /// scanner itself.
    pub fn contains_stem_of(&self, word: &str) -> bool {
        match &self.stemmer {
            Some(stemmer) => self.trie.search(&stemmer.stem(word)),
            None => false,
        }
    }

    /// Apply the stemmer, or pass the word through when there is none.
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word),
            None => Cow::Borrowed(word),
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn has_stemmer(&self) -> bool {
        self.stemmer.is_some()
    }

    /// Number of distinct normalized entries.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("entries", &self.trie.len())
            .field("has_stemmer", &self.has_stemmer())
            .finish()
    }
}
