//! Prefix tree keyed by Unicode code points.
//!
//! A [`Trie`] holds the word set of one language. Lookups either take a whole
//! string ([`Trie::search`], [`Trie::starts_with`]) or go one code point at a
//! time through a [`TrieCursor`], which is what the scanner uses when letters
//! of a word are separated by punctuation that must not reach the trie.
//!
//! # Architecture
//!
//! - [`trie`] -- Node storage, insertion, lookup and pruning removal
//! - [`cursor`] -- Incremental traversal handle

pub mod cursor;
pub mod trie;

pub use cursor::TrieCursor;
pub use trie::Trie;

/// Outcome of following a prefix through the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixMatch {
    /// The whole prefix exists as a path from the root.
    pub has_prefix: bool,
    /// The node reached by the prefix terminates a stored word.
    pub is_complete: bool,
}

impl PrefixMatch {
    /// No path for the prefix.
    pub const NONE: PrefixMatch = PrefixMatch {
        has_prefix: false,
        is_complete: false,
    };

    pub(crate) fn at(is_complete: bool) -> Self {
        Self {
            has_prefix: true,
            is_complete,
        }
    }
}
