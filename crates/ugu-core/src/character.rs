// Character classification and case utilities
//
// The scanner and the dictionary only ever see text through these helpers, so
// "what counts as a letter" and "how a letter is lower-cased" are decided in
// exactly one place.

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is a letter.
///
/// Every Unicode alphabetic code point counts, whatever the script. Digits,
/// whitespace, punctuation, symbols and the mask character do not.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase produces an iterator because some
// characters map to several code points. The scanner advances a trie one code
// point at a time, so only the first character of the mapping is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only the
/// first character.
#[inline]
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lower-case `word` if it consists of letters only.
///
/// Returns `None` for an empty word or one containing any non-letter: the
/// scanner only ever feeds letters to a trie, so such an entry could never
/// match as stored.
pub fn lowercase_word(word: &str) -> Option<String> {
    if word.is_empty() || !word.chars().all(is_letter) {
        return None;
    }
    Some(word.chars().map(simple_lower).collect())
}
