//! Regular-expression extraction backed by the linear-time `regex` engine.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use tracing::{debug, instrument};

use crate::error::TextError;

/// Upper bound on cached compiled patterns before the cache is flushed.
const CACHE_CAPACITY: usize = 64;

static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Return every non-overlapping leftmost match of `pattern` in `text`, in order.
///
/// Returns `TextError::InvalidPattern` if `pattern` does not compile, and an
/// empty vector if it compiles but matches nothing.
#[instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn find_all_matches<'t>(pattern: &str, text: &'t str) -> Result<Vec<&'t str>, TextError> {
    let re = compile(pattern)?;
    let matches: Vec<&str> = re.find_iter(text).map(|m| m.as_str()).collect();
    debug!(matches = matches.len(), "pattern scanned");
    Ok(matches)
}

/// Compile `pattern`, reusing a cached `Regex` when one exists.
///
/// `Regex` is immutable and cheap to clone, so a poisoned lock still holds
/// valid entries and is recovered rather than propagated.
pub fn compile(pattern: &str) -> Result<Regex, TextError> {
    let mut cache = PATTERN_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern).map_err(|err| TextError::invalid_pattern(pattern, &err))?;
    if cache.len() >= CACHE_CAPACITY {
        debug!(capacity = CACHE_CAPACITY, "pattern cache full, flushing");
        cache.clear();
    }
    cache.insert(pattern.to_string(), re.clone());
    Ok(re)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "Hello there, these words: apple, world, and peace.";

    #[test]
    fn five_letter_words_in_order() {
        let matches = find_all_matches(r"\b\w{5}\b", SENTENCE).expect("valid pattern");
        assert_eq!(
            matches,
            vec!["Hello", "there", "these", "words", "apple", "world", "peace"]
        );
    }

    #[test]
    fn unbounded_pattern_finds_the_same_words_here() {
        let bounded = find_all_matches(r"\b\w{5}\b", SENTENCE).expect("valid pattern");
        let unbounded = find_all_matches(r"\w{5}", SENTENCE).expect("valid pattern");
        assert_eq!(bounded, unbounded);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let matches = find_all_matches(r"\d+", SENTENCE).expect("valid pattern");
        assert!(matches.is_empty());
    }

    #[test]
    fn matches_do_not_overlap() {
        let matches = find_all_matches("aa", "aaaaa").expect("valid pattern");
        assert_eq!(matches, vec!["aa", "aa"]);
    }

    #[test]
    fn unclosed_bracket_is_invalid_pattern() {
        let err = find_all_matches("[abc", SENTENCE).expect_err("must fail");
        match err {
            TextError::InvalidPattern { pattern, reason } => {
                assert_eq!(pattern, "[abc");
                assert!(!reason.is_empty());
            }
        }
    }

    #[test]
    fn cached_pattern_gives_identical_results() {
        let first = find_all_matches(r"o\w", "foo boo").expect("valid pattern");
        let second = find_all_matches(r"o\w", "foo boo").expect("valid pattern");
        assert_eq!(first, second);
        assert_eq!(first, vec!["oo", "oo"]);
    }

    #[test]
    fn matches_multibyte_text() {
        let matches = find_all_matches(r"\w+", "naïve café").expect("valid pattern");
        assert_eq!(matches, vec!["naïve", "café"]);
    }
}
