// Trie storage and whole-word operations

use hashbrown::HashMap;

use crate::PrefixMatch;
use crate::cursor::TrieCursor;

/// A single trie node.
///
/// Each node exclusively owns its children; there are no parent links.
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    pub(crate) children: HashMap<char, TrieNode>,
    pub(crate) is_end: bool,
}

/// Prefix tree holding the complete word set for one language.
///
/// Words are stored as given; callers normalize (lower-case, stem) before
/// inserting. A root-to-node path ending at a node with `is_end` set spells
/// exactly one stored word.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a word.
    ///
    /// Returns `true` if the word was not stored before. Inserting the same
    /// word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.is_end {
            return false;
        }
        node.is_end = true;
        self.len += 1;
        true
    }

    /// Check whether `word` is stored exactly.
    ///
    /// A strict prefix of a stored word is not a match unless it was itself
    /// inserted.
    pub fn search(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.is_end)
    }

    /// Check whether any stored word starts with `prefix`, and whether
    /// `prefix` is itself a stored word.
    ///
    /// The empty prefix always reports no match.
    pub fn starts_with(&self, prefix: &str) -> PrefixMatch {
        if prefix.is_empty() {
            return PrefixMatch::NONE;
        }
        match self.find(prefix) {
            Some(node) => PrefixMatch::at(node.is_end),
            None => PrefixMatch::NONE,
        }
    }

    /// Remove a word.
    ///
    /// Nodes left without children and not terminating another word are
    /// pruned on the way back to the root. Removing an absent or empty word
    /// does nothing and returns `false`.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return false;
        }
        let mut removed = false;
        remove_from(&mut self.root, &chars, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Create a cursor positioned at the root.
    pub fn cursor(&self) -> TrieCursor<'_> {
        TrieCursor::new(&self.root)
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

/// Clear the terminal flag for `word` below `node`.
///
/// Returns `true` when `node` itself has become prunable: no children and not
/// the end of another word. `removed` is set once the terminal flag is found
/// and cleared.
fn remove_from(node: &mut TrieNode, word: &[char], removed: &mut bool) -> bool {
    let Some((c, rest)) = word.split_first() else {
        if !node.is_end {
            return false;
        }
        node.is_end = false;
        *removed = true;
        return node.children.is_empty();
    };

    let Some(child) = node.children.get_mut(c) else {
        return false;
    };
    if remove_from(child, rest, removed) {
        node.children.remove(c);
        return !node.is_end && node.children.is_empty();
    }
    false
}
