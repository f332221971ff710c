//! Text transformations over Unicode code points.
//!
//! Every helper here is total: empty input, empty delimiters and absent
//! substrings all produce a defined result.

use serde::Serialize;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Reverse `text` by code point.
///
/// The input is decoded into `char`s first and reversed with a two-pointer
/// swap, so multi-byte characters are never split. Combining marks end up
/// before their base character; use [`reverse_graphemes`] to keep them attached.
pub fn reverse(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 {
        return text.to_string();
    }
    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        chars.swap(left, right);
        left += 1;
        right -= 1;
    }
    chars.into_iter().collect()
}

/// Reverse `text` by extended grapheme cluster.
pub fn reverse_graphemes(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

/// Split on every occurrence of `split_delim`, then join the parts with `join_delim`.
///
/// Empty segments are kept, so `split_and_join(s, d, d).1 == s` for any `s`
/// and `d`. An empty `split_delim` yields an empty segment at each end plus
/// one segment per code point.
pub fn split_and_join<'a>(
    text: &'a str,
    split_delim: &str,
    join_delim: &str,
) -> (Vec<&'a str>, String) {
    let parts: Vec<&str> = text.split(split_delim).collect();
    let joined = parts.join(join_delim);
    debug!(parts = parts.len(), "split and joined");
    (parts, joined)
}

/// Case transforms of a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariants {
    pub upper: String,
    pub lower: String,
    /// First letter of each alphabetic run raised, the rest lowered.
    pub title: String,
    /// Upper and lower case letters exchanged.
    pub swapped: String,
}

/// Compute every case variant of `text` using Unicode case tables.
///
/// Casing is locale independent, and may change length (`ß` upper-cases to `SS`).
pub fn case_variants(text: &str) -> CaseVariants {
    CaseVariants {
        upper: text.to_uppercase(),
        lower: text.to_lowercase(),
        title: title_case(text),
        swapped: swap_case(text),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

fn swap_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Replace every non-overlapping occurrence of `target`, scanning left to right.
///
/// An empty `target` inserts `replacement` at every code-point boundary,
/// including both ends: `replace_all("ab", "", "-") == "-a-b-"`.
pub fn replace_all(text: &str, target: &str, replacement: &str) -> String {
    text.replace(target, replacement)
}

/// Strip leading and trailing Unicode whitespace.
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Code-point offset of the first occurrence of `substr`, or `None`.
///
/// An empty `substr` matches at offset 0.
pub fn index_of(text: &str, substr: &str) -> Option<usize> {
    byte_index_of(text, substr).map(|byte| text[..byte].chars().count())
}

/// UTF-8 byte offset of the first occurrence of `substr`, or `None`.
///
/// The offset always lands on a char boundary, so it is safe to slice with.
pub fn byte_index_of(text: &str, substr: &str) -> Option<usize> {
    text.find(substr)
}

/// Split strictly on `'\n'`.
///
/// `"\r\n"` is not special-cased: the `'\r'` stays at the end of its line.
/// A trailing newline produces a trailing empty line, and empty input
/// produces a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Split on runs of Unicode whitespace, dropping empty fields.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
