// Pass 2: exact bound resolution from candidate starts

use ugu_core::WordBounds;
use ugu_core::character::{is_letter, simple_lower};
use ugu_trie::Trie;

/// Resolve the span of every candidate that contains a complete entry.
///
/// From each start the text is walked forward. Letters are lower-cased, fed
/// to the trie and collected into the span's word; other characters are
/// skipped. The first letter that completes an entry fixes `bad_part`. After
/// that the span keeps absorbing letters, without consulting the trie, and
/// closes at the next non-letter or at the end of the text. A letter that
/// leaves the trie before any entry was completed drops the candidate.
///
/// Results come out in the order of `starts` and may overlap.
pub fn find_word_bounds(trie: &Trie, text: &[char], starts: &[usize]) -> Vec<WordBounds> {
    let mut bounds = Vec::new();
    let mut cursor = trie.cursor();
    let mut word = String::new();

    'candidates: for &start in starts {
        cursor.reset();
        word.clear();
        let mut bad_part: Option<String> = None;
        let mut end = text.len();

        for (i, &ch) in text.iter().enumerate().skip(start) {
            if !is_letter(ch) {
                if bad_part.is_some() {
                    end = i;
                    break;
                }
                continue;
            }

            let ch = simple_lower(ch);
            word.push(ch);
            if bad_part.is_some() {
                continue;
            }

            let step = cursor.advance(ch);
            if !step.has_prefix {
                continue 'candidates;
            }
            if step.is_complete {
                bad_part = Some(word.clone());
            }
        }

        if let Some(bad_part) = bad_part {
            bounds.push(WordBounds::new(bad_part, word.as_str(), start, end));
        }
    }

    bounds
}
