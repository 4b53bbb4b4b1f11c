//! Character-class predicates and small string helpers for tokens.

use std::sync::LazyLock;

use regex::Regex;

/// Unicode punctuation plus the ASCII punctuation set, which also covers
/// separators like `|` and `+` that Unicode files under symbols.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}[:punct:]]+$").expect("valid punctuation pattern"));

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{S}+$").expect("valid symbol pattern"));

/// Whether every character of `token` is punctuation.
///
/// Empty tokens are not punctuation.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.is_match(token)
}

/// Whether every character of `token` is a Unicode symbol.
pub fn is_symbol(token: &str) -> bool {
    SYMBOL.is_match(token)
}

/// Reverse a string by Unicode code point.
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}

/// Byte offsets of every non-overlapping occurrence of `needle` in
/// `haystack`, scanning left to right.
pub fn find_all(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    haystack.match_indices(needle).map(|(at, _)| at).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("|"));
        assert!(is_punctuation("..."));
        assert!(is_punctuation("«"));
        assert!(is_punctuation("—"));
        assert!(!is_punctuation(""));
        assert!(!is_punctuation("cats"));
        assert!(!is_punctuation("a."));
    }

    #[test]
    fn test_is_symbol() {
        assert!(is_symbol("©"));
        assert!(is_symbol("€"));
        assert!(!is_symbol("."));
        assert!(!is_symbol("x"));
    }

    #[test]
    fn test_reverse_chars_keeps_code_points() {
        assert_eq!(reverse_chars("abc"), "cba");
        assert_eq!(reverse_chars("кот ест"), "тсе ток");
        assert_eq!(reverse_chars(""), "");
    }

    #[test]
    fn test_find_all_non_overlapping() {
        assert_eq!(find_all("aaaa", "aa"), vec![0, 2]);
        assert_eq!(find_all("the cat the", "the"), vec![0, 8]);
        assert!(find_all("abc", "").is_empty());
        assert!(find_all("abc", "x").is_empty());
    }
}
