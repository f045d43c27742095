// Pass 1: cheap candidate start locator

use ugu_core::character::{is_letter, simple_lower};
use ugu_trie::Trie;

/// Find the code-point offsets where a dictionary match may begin.
///
/// Only the start of each letter run is considered. A start qualifies when
/// its first letter and the next letter in the text (punctuation and spaces
/// skipped) form a dictionary prefix, or when the first letter alone is a
/// complete entry. Every real match start is reported; some reported starts
/// will not survive bound resolution.
pub fn find_candidate_starts(trie: &Trie, text: &[char]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut cursor = trie.cursor();

    for (i, &ch) in text.iter().enumerate() {
        if !is_letter(ch) || (i > 0 && is_letter(text[i - 1])) {
            continue;
        }

        cursor.reset();
        let first = cursor.advance(simple_lower(ch));
        if !first.has_prefix {
            continue;
        }
        if first.is_complete {
            starts.push(i);
            continue;
        }

        let next = text[i + 1..].iter().copied().find(|&c| is_letter(c));
        if let Some(next) = next {
            if cursor.advance(simple_lower(next)).has_prefix {
                starts.push(i);
            }
        }
    }

    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Trie {
        // stems of "игра", "игрок", "играть", "яблоко"
        ["игр", "игрок", "игра", "яблок"].into_iter().collect()
    }

    fn starts(text: &str) -> Vec<usize> {
        let chars: Vec<char> = text.chars().collect();
        find_candidate_starts(&dictionary(), &chars)
    }

    #[test]
    fn empty_text() {
        assert!(starts("").is_empty());
    }

    #[test]
    fn clean_text() {
        assert!(starts("Это чистый текст.").is_empty());
    }

    #[test]
    fn single_word() {
        assert_eq!(starts("игра"), vec![0]);
        assert_eq!(starts("яблоко"), vec![0]);
    }

    #[test]
    fn multiple_words() {
        assert_eq!(starts("это игра"), vec![4]);
        assert_eq!(starts("игра это"), vec![0]);
        assert_eq!(starts("игра игра"), vec![0, 5]);
        assert_eq!(starts("игра яблоко игра"), vec![0, 5, 12]);
        assert_eq!(starts("Эта игра хорошая"), vec![4]);
        assert_eq!(starts("лучшая игра"), vec![7]);
    }

    #[test]
    fn second_letter_may_come_from_next_word() {
        assert_eq!(starts("яблоко и игра"), vec![0, 9]);
        assert_eq!(starts("я яблоко"), vec![2]);
        assert_eq!(starts("я б яблоко"), vec![0, 4]);
        assert_eq!(starts("я я яблоко"), vec![4]);
        assert_eq!(starts("я я я яблоко"), vec![6]);
        assert_eq!(starts("игра я"), vec![0]);
        assert_eq!(starts("игра я б"), vec![0, 5]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(starts("Игра"), vec![0]);
        assert_eq!(starts("ИГРА"), vec![0]);
        assert_eq!(starts("ЯбЛоКо"), vec![0]);
        assert_eq!(starts("ЯБЛОКО И ИГРА"), vec![0, 9]);
    }

    #[test]
    fn with_symbols() {
        assert_eq!(starts("игра. яблоко"), vec![0, 6]);
        assert_eq!(starts("игра.яблоко"), vec![0, 5]);
        assert_eq!(starts("  игра. яблоко"), vec![2, 8]);
        assert_eq!(starts("игра.>яблоко."), vec![0, 6]);
        assert_eq!(starts("***и*г*р*а* яблоко"), vec![3, 12]);
        assert_eq!(starts("игра *1*а*я*я******  ...****б*л*о*к*о"), vec![0, 12]);
    }

    #[test]
    fn only_run_starts_are_considered() {
        // "игр" inside "подвигр" is not at a run start
        assert!(starts("подвигра").is_empty());
    }

    #[test]
    fn single_letter_entry_without_second_letter() {
        let trie: Trie = ["я", "яблок"].into_iter().collect();
        let chars: Vec<char> = "ну я".chars().collect();
        assert_eq!(find_candidate_starts(&trie, &chars), vec![3]);
    }

    #[test]
    fn last_letter_without_follower_is_not_a_candidate() {
        let chars: Vec<char> = "это и".chars().collect();
        assert!(find_candidate_starts(&dictionary(), &chars).is_empty());
    }
}
