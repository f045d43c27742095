// Output assembly: mask confirmed spans, copy everything else verbatim

use std::borrow::Cow;

use ugu_core::WordBounds;

/// Build the output text from resolved bounds.
///
/// Bounds are taken left to right; one that overlaps the previously kept
/// bound is dropped, so an earlier match always wins. For each kept bound
/// `confirm` decides whether it is masked: every code point in the span,
/// punctuation included, becomes `mask`. Unmasked spans and the text between
/// spans are copied unchanged, so the output has as many code points as the
/// input.
///
/// Returns the input itself when nothing was masked.
pub fn redact<'a, F>(
    text: &'a str,
    chars: &[char],
    bounds: &[WordBounds],
    mask: char,
    mut confirm: F,
) -> (Cow<'a, str>, bool)
where
    F: FnMut(&WordBounds) -> bool,
{
    if bounds.is_empty() {
        return (Cow::Borrowed(text), false);
    }

    let mut output = String::with_capacity(text.len());
    let mut censored = false;
    let mut previous: Option<&WordBounds> = None;

    for bound in bounds {
        debug_assert!(
            bound.start <= bound.end && bound.end <= chars.len(),
            "invalid span {}..{} for text of {} chars",
            bound.start,
            bound.end,
            chars.len()
        );
        if previous.is_some_and(|prev| prev.overlaps(bound)) {
            continue;
        }

        let copy_from = previous.map_or(0, |prev| prev.end);
        output.extend(&chars[copy_from..bound.start]);

        if confirm(bound) {
            output.extend(std::iter::repeat_n(mask, bound.len()));
            censored = true;
        } else {
            output.extend(&chars[bound.start..bound.end]);
        }
        previous = Some(bound);
    }

    if !censored {
        return (Cow::Borrowed(text), false);
    }

    let tail = previous.map_or(0, |prev| prev.end);
    output.extend(&chars[tail..]);
    (Cow::Owned(output), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        text: &str,
        bounds: &[WordBounds],
        confirm: impl FnMut(&WordBounds) -> bool,
    ) -> (String, bool) {
        let chars: Vec<char> = text.chars().collect();
        let (out, censored) = redact(text, &chars, bounds, '*', confirm);
        (out.into_owned(), censored)
    }

    #[test]
    fn no_bounds_borrows_input() {
        let chars: Vec<char> = "игра".chars().collect();
        let (out, censored) = redact("игра", &chars, &[], '*', |_| true);
        assert!(matches!(out, Cow::Borrowed("игра")));
        assert!(!censored);
    }

    #[test]
    fn unconfirmed_bounds_borrow_input() {
        let chars: Vec<char> = "играция".chars().collect();
        let bounds = [WordBounds::new("игр", "играция", 0, 7)];
        let (out, censored) = redact("играция", &chars, &bounds, '*', |_| false);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(!censored);
    }

    #[test]
    fn masks_span_and_keeps_surroundings() {
        let bounds = [
            WordBounds::new("игр", "игра", 0, 4),
            WordBounds::new("яблок", "яблоко", 5, 11),
        ];
        assert_eq!(
            run("игра яблоко!", &bounds, |_| true),
            ("**** ******!".to_string(), true)
        );
    }

    #[test]
    fn mask_covers_interior_punctuation() {
        let bounds = [WordBounds::new("игр", "игр", 0, 5)];
        assert_eq!(
            run("и.г.р.а...", &bounds, |_| true),
            ("*****.а...".to_string(), true)
        );
    }

    #[test]
    fn only_confirmed_spans_are_masked() {
        let bounds = [
            WordBounds::new("игр", "играция", 0, 7),
            WordBounds::new("игр", "игра", 8, 12),
        ];
        assert_eq!(
            run("играция игра", &bounds, |b| b.word == "игра"),
            ("играция ****".to_string(), true)
        );
    }

    #[test]
    fn overlapping_later_bound_is_dropped() {
        let bounds = [
            WordBounds::new("игр", "играция", 0, 8),
            WordBounds::new("гр", "грация", 2, 8),
        ];
        let mut seen = Vec::new();
        let (out, censored) = run("и грация", &bounds, |b| {
            seen.push(b.start);
            true
        });
        assert_eq!(out, "********");
        assert!(censored);
        assert_eq!(seen, vec![0]);
    }

    #[test]
    fn overlap_is_checked_against_last_kept_bound() {
        let bounds = [
            WordBounds::new("аб", "аб", 0, 2),
            WordBounds::new("б", "б", 1, 2),
            WordBounds::new("в", "в", 3, 4),
        ];
        assert_eq!(run("аб в", &bounds, |_| true), ("** *".to_string(), true));
    }

    #[test]
    fn custom_mask_preserves_length() {
        let chars: Vec<char> = "ну игра".chars().collect();
        let bounds = [WordBounds::new("игр", "игра", 3, 7)];
        let (out, _) = redact("ну игра", &chars, &bounds, '#', |_| true);
        assert_eq!(out, "ну ####");
        assert_eq!(out.chars().count(), chars.len());
    }
}
