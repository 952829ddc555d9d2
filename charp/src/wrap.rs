// Copyright 2026 the CharP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Balanced two-line wrapping for long tick labels.
//!
//! Category labels on bar charts are often long phrases. Instead of wrapping each
//! label independently, [`break_labels`] wraps the whole set against a shared width:
//! the longest label is split into two balanced lines, and the longer of those lines
//! becomes the width budget every other label has to respect.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};

/// The one or two lines produced by [`break_two_lines`].
pub type Lines = SmallVec<[String; 2]>;

/// Splits `text` into two lines of similar length at a word boundary.
///
/// If `acceptable_size` is given and `text` is at most that many characters long,
/// `text` is returned unchanged as a single line. Otherwise the split point that
/// minimizes the length difference between the two lines is chosen; on ties the
/// later split point wins, so the first line gets more words.
///
/// Words on each line are joined by a single space. Text with fewer than two words
/// cannot be split and is returned unchanged.
pub fn break_two_lines(text: &str, acceptable_size: Option<usize>) -> Lines {
    if acceptable_size.is_some_and(|size| char_len(text) <= size) {
        return smallvec![String::from(text)];
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let Some(split) = balanced_split(&words) else {
        return smallvec![String::from(text)];
    };
    smallvec![words[..split].join(" "), words[split..].join(" ")]
}

/// Wraps every label in `labels` against the width budget of the longest one.
///
/// The longest label (first one on ties) is split in two with no threshold; the
/// longer of its two lines is the acceptable size for the whole set. Each label is
/// then passed through [`break_two_lines`] with that size and its lines are joined
/// with `\n`. An empty input yields an empty output.
pub fn break_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let Some(acceptable_size) = acceptable_size(labels) else {
        return Vec::new();
    };
    labels
        .iter()
        .map(|label| break_two_lines(label.as_ref(), Some(acceptable_size)).join("\n"))
        .collect()
}

/// Returns the per-line width budget derived from the longest label.
pub fn acceptable_size<S: AsRef<str>>(labels: &[S]) -> Option<usize> {
    let mut longest: Option<&str> = None;
    for label in labels {
        let label = label.as_ref();
        if longest.is_none_or(|best| char_len(label) > char_len(best)) {
            longest = Some(label);
        }
    }
    let lines = break_two_lines(longest?, None);
    lines.iter().map(|line| char_len(line)).max()
}

/// Number of words before the most balanced break, or `None` for fewer than two words.
fn balanced_split(words: &[&str]) -> Option<usize> {
    if words.len() < 2 {
        return None;
    }
    let lens: Vec<usize> = words.iter().map(|w| char_len(w)).collect();
    let total: usize = lens.iter().sum::<usize>() + lens.len() - 1;

    let mut best: Option<(usize, usize)> = None;
    let mut first = 0_usize;
    for n in 1..words.len() {
        // `first` is the length of words[..n] joined by single spaces.
        first += lens[n - 1] + usize::from(n > 1);
        let second = total - first - 1;
        let diff = first.abs_diff(second);
        if best.is_none_or(|(_, best_diff)| diff <= best_diff) {
            best = Some((n, diff));
        }
    }
    best.map(|(n, _)| n)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn lines(text: &str, acceptable_size: Option<usize>) -> Vec<String> {
        break_two_lines(text, acceptable_size).into_vec()
    }

    #[test]
    fn always_breaks_in_two_without_threshold() {
        assert_eq!(
            lines("1234 1234 1234 1234", None),
            vec!["1234 1234", "1234 1234"]
        );
    }

    #[test]
    fn ties_prefer_more_words_on_first_line() {
        assert_eq!(lines("123 1234 123", None), vec!["123 1234", "123"]);
    }

    #[test]
    fn second_line_may_be_longer() {
        assert_eq!(lines("123 123 12 12345", None), vec!["123 123", "12 12345"]);
    }

    #[test]
    fn text_within_acceptable_size_is_untouched() {
        let s = "123 123 12";
        assert_eq!(lines(s, Some(s.len())), vec![s]);
    }

    #[test]
    fn text_over_acceptable_size_is_split() {
        assert_eq!(lines("123 123 12", Some(9)), vec!["123", "123 12"]);
        assert_eq!(lines("123 123 12", Some(10)), vec!["123 123 12"]);
    }

    #[test]
    fn single_word_is_never_split() {
        assert_eq!(lines("Supercalifragilistic", None), vec!["Supercalifragilistic"]);
        assert_eq!(lines("Supercalifragilistic", Some(3)), vec!["Supercalifragilistic"]);
        assert_eq!(lines("", None), vec![""]);
    }

    #[test]
    fn label_set_wraps_against_longest_label() {
        let labels = ["abc cde efg", "abc cde"];
        assert_eq!(break_labels(&labels), vec!["abc cde\nefg", "abc cde"]);
    }

    #[test]
    fn empty_label_set_yields_nothing() {
        let labels: [&str; 0] = [];
        assert!(break_labels(&labels).is_empty());
        assert_eq!(acceptable_size(&labels), None);
    }

    #[test]
    fn longest_label_tie_uses_first_occurrence() {
        // Both are 9 chars; the first splits as "aaaa"/"bbbb", giving a budget of 4.
        let labels = ["aaaa bbbb", "a bbbbbbb"];
        assert_eq!(acceptable_size(&labels), Some(4));
    }

    #[test]
    fn split_preserves_word_sequence() {
        let inputs = [
            "one two",
            "a bb ccc dddd eeeee",
            "Ministério da Educação e Cultura",
            "x   spaced    words here",
        ];
        for input in inputs {
            let out = break_two_lines(input, None);
            assert_eq!(out.len(), 2, "multi-word input must split: {input:?}");
            let rejoined: Vec<&str> = out.iter().flat_map(|l| l.split_whitespace()).collect();
            let original: Vec<&str> = input.split_whitespace().collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn split_is_as_balanced_as_exhaustive_search() {
        let inputs = [
            "1234 1234 1234 1234",
            "a bb ccc dddd eeeee ffffff",
            "Produto Interno Bruto per capita",
            "x yy",
            "long-word short tiny a",
        ];
        for input in inputs {
            let words: Vec<&str> = input.split_whitespace().collect();
            let best = (1..words.len())
                .map(|n| {
                    let a = words[..n].join(" ").chars().count();
                    let b = words[n..].join(" ").chars().count();
                    a.abs_diff(b)
                })
                .min()
                .unwrap();
            let out = break_two_lines(input, None);
            let got = char_len(&out[0]).abs_diff(char_len(&out[1]));
            assert_eq!(got, best, "unbalanced split for {input:?}: {out:?}");
        }
    }

    #[test]
    fn rewrapping_a_wrapped_set_is_stable() {
        let labels = [
            "Gross domestic product",
            "Inflation",
            "Unemployment rate among young adults",
            "Trade balance",
        ];
        let once = break_labels(&labels);
        let size = acceptable_size(&labels).unwrap();
        let flattened: Vec<String> = once.iter().map(|l| l.replace('\n', " ")).collect();
        assert_eq!(acceptable_size(&flattened), Some(size));
        let twice = break_labels(&flattened);
        assert_eq!(once, twice);
    }

    #[test]
    fn accepts_owned_strings() {
        let labels = vec!["abc cde efg".to_string(), "abc cde".to_string()];
        assert_eq!(break_labels(&labels), vec!["abc cde\nefg", "abc cde"]);
    }
}
