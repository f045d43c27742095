// Incremental trie traversal

use crate::PrefixMatch;
use crate::trie::TrieNode;

/// Resumable traversal handle over a [`Trie`](crate::Trie).
///
/// The cursor borrows the trie, holds its own position and is advanced one
/// code point at a time. Callers decide which characters to feed: the scanner
/// skips punctuation between letters and only advances on letters.
///
/// A cursor is private scan state. Each scan creates its own; the trie stays
/// shareable between threads because the position never lives inside it.
#[derive(Debug, Clone)]
pub struct TrieCursor<'a> {
    root: &'a TrieNode,
    current: &'a TrieNode,
}

impl<'a> TrieCursor<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Self {
        Self {
            root,
            current: root,
        }
    }

    /// Follow the edge for `c` from the current position.
    ///
    /// On success the cursor moves and the result tells whether the new node
    /// ends a stored word. Without an edge the cursor stays where it is and
    /// [`PrefixMatch::NONE`] is returned; the path is dead until [`reset`].
    ///
    /// [`reset`]: TrieCursor::reset
    #[inline]
    pub fn advance(&mut self, c: char) -> PrefixMatch {
        match self.current.children.get(&c) {
            Some(child) => {
                self.current = child;
                PrefixMatch::at(child.is_end)
            }
            None => PrefixMatch::NONE,
        }
    }

    /// Move back to the root.
    #[inline]
    pub fn reset(&mut self) {
        self.current = self.root;
    }

    /// Whether the cursor sits on the root.
    pub fn at_root(&self) -> bool {
        std::ptr::eq(self.current, self.root)
    }
}

#[cfg(test)]
mod tests {
    use crate::{PrefixMatch, Trie};

    fn trie() -> Trie {
        ["игр", "игра", "игрок", "яблок"].into_iter().collect()
    }

    #[test]
    fn advance_walks_prefixes() {
        let trie = trie();
        let mut cursor = trie.cursor();
        assert_eq!(cursor.advance('и'), PrefixMatch::at(false));
        assert_eq!(cursor.advance('г'), PrefixMatch::at(false));
        assert_eq!(cursor.advance('р'), PrefixMatch::at(true));
        assert_eq!(cursor.advance('а'), PrefixMatch::at(true));
    }

    #[test]
    fn failed_advance_keeps_position() {
        let trie = trie();
        let mut cursor = trie.cursor();
        cursor.advance('и');
        cursor.advance('г');
        assert_eq!(cursor.advance('x'), PrefixMatch::NONE);
        // still after "иг"
        assert_eq!(cursor.advance('р'), PrefixMatch::at(true));
    }

    #[test]
    fn reset_returns_to_root() {
        let trie = trie();
        let mut cursor = trie.cursor();
        assert!(cursor.at_root());
        cursor.advance('я');
        assert!(!cursor.at_root());
        assert_eq!(cursor.advance('и'), PrefixMatch::NONE);
        cursor.reset();
        assert!(cursor.at_root());
        assert_eq!(cursor.advance('и'), PrefixMatch::at(false));
    }

    #[test]
    fn empty_trie_never_matches() {
        let trie = Trie::new();
        let mut cursor = trie.cursor();
        assert_eq!(cursor.advance('a'), PrefixMatch::NONE);
        assert!(cursor.at_root());
    }

    #[test]
    fn independent_cursors() {
        let trie = trie();
        let mut a = trie.cursor();
        let mut b = trie.cursor();
        a.advance('и');
        assert_eq!(b.advance('я'), PrefixMatch::at(false));
        assert_eq!(a.advance('г'), PrefixMatch::at(false));
        assert_eq!(b.advance('б'), PrefixMatch::at(false));
    }
}
