//! Marking the target and neighbor tokens inside an evidence snippet.

use crate::config::HighlightMode;
use crate::corpus::text::{TOKEN_DELIMITER, join_tokens};

pub const TARGET_OPEN: &str = "?>";
pub const TARGET_CLOSE: &str = "<?";
pub const NEIGHBOR_OPEN: &str = "!>";
pub const NEIGHBOR_CLOSE: &str = "<!";

/// Join `tokens` into a snippet with the token at `target` wrapped in
/// `?>…<?` and the token at `neighbor` wrapped in `!>…<!`.
///
/// Both indices are relative to `tokens`. With
/// [`HighlightMode::FirstOccurrence`] the markers go around the first
/// textual occurrence of each token instead, target first.
///
/// # Examples
///
/// ```
/// use concordance::config::HighlightMode;
/// use concordance::relations::highlight::highlight_snippet;
///
/// let tokens = ["a", "cat", "and", "a", "dog"];
/// let positional = highlight_snippet(&tokens, 1, 3, HighlightMode::Positional);
/// assert_eq!(positional, "a ?>cat<? and !>a<! dog");
///
/// let legacy = highlight_snippet(&tokens, 1, 3, HighlightMode::FirstOccurrence);
/// assert_eq!(legacy, "!>a<! ?>cat<? and a dog");
/// ```
pub fn highlight_snippet<S: AsRef<str>>(
    tokens: &[S],
    target: usize,
    neighbor: usize,
    mode: HighlightMode,
) -> String {
    match mode {
        HighlightMode::Positional => positional(tokens, target, neighbor),
        HighlightMode::FirstOccurrence => first_occurrence(tokens, target, neighbor),
    }
}

fn positional<S: AsRef<str>>(tokens: &[S], target: usize, neighbor: usize) -> String {
    let mut snippet = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            snippet.push(TOKEN_DELIMITER);
        }
        let token = token.as_ref();
        if i == target {
            snippet.push_str(TARGET_OPEN);
            snippet.push_str(token);
            snippet.push_str(TARGET_CLOSE);
        } else if i == neighbor {
            snippet.push_str(NEIGHBOR_OPEN);
            snippet.push_str(token);
            snippet.push_str(NEIGHBOR_CLOSE);
        } else {
            snippet.push_str(token);
        }
    }
    snippet
}

fn first_occurrence<S: AsRef<str>>(tokens: &[S], target: usize, neighbor: usize) -> String {
    let mut snippet = join_tokens(tokens);
    if let Some(token) = tokens.get(target) {
        let token: &str = token.as_ref();
        snippet = snippet.replacen(token, &format!("{TARGET_OPEN}{token}{TARGET_CLOSE}"), 1);
    }
    if let Some(token) = tokens.get(neighbor) {
        let token: &str = token.as_ref();
        snippet = snippet.replacen(token, &format!("{NEIGHBOR_OPEN}{token}{NEIGHBOR_CLOSE}"), 1);
    }
    snippet
}
