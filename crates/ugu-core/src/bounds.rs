// Span records produced by the bound resolver

/// A resolved span of text that contains at least one complete dictionary hit.
///
/// Offsets are code-point indices into the scanned text, `start` inclusive and
/// `end` exclusive. The span may include punctuation that sat between the
/// letters of the matched word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBounds {
    /// Shortest prefix of `word` that is a complete dictionary entry.
    pub bad_part: String,

    /// Every letter in `[start, end)`, lower-cased, punctuation stripped.
    pub word: String,

    /// First code point of the span.
    pub start: usize,

    /// One past the last code point of the span.
    pub end: usize,
}

impl WordBounds {
    /// Create a new span record.
    pub fn new(
        bad_part: impl Into<String>,
        word: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        debug_assert!(start <= end, "span end {end} precedes start {start}");
        Self {
            bad_part: bad_part.into(),
            word: word.into(),
            start,
            end,
        }
    }

    /// Number of code points covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the spanned letters are themselves the dictionary entry.
    pub fn is_exact(&self) -> bool {
        self.word == self.bad_part
    }

    /// Whether this span shares any code point with `other`.
    pub fn overlaps(&self, other: &WordBounds) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_code_points() {
        let b = WordBounds::new("игр", "игра", 4, 12);
        assert_eq!(b.len(), 8);
        assert!(!b.is_empty());
    }

    #[test]
    fn exact_when_word_equals_bad_part() {
        assert!(WordBounds::new("игр", "игр", 0, 5).is_exact());
        assert!(!WordBounds::new("игр", "игра", 0, 4).is_exact());
    }

    #[test]
    fn overlap_is_half_open() {
        let a = WordBounds::new("игр", "игра", 0, 4);
        let b = WordBounds::new("яблок", "яблоко", 4, 10);
        let c = WordBounds::new("игр", "игр", 3, 6);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }
}
