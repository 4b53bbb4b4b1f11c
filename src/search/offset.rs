//! Mapping byte offsets in a joined view back to token indices.

use crate::error::{ConcordanceError, Result};

/// Index of the token containing byte `offset` of `tokens` joined with
/// single spaces.
///
/// Each token owns its bytes plus the delimiter that follows it, so an
/// offset that lands on a space belongs to the token before the space. The
/// offset one past the end of the joined string still maps to the last
/// token; anything further is `None`.
///
/// # Examples
///
/// ```
/// use concordance::search::offset::token_index_at;
///
/// let tokens = ["the", "quick", "fox"];
/// assert_eq!(token_index_at(&tokens, 0), Some(0));
/// assert_eq!(token_index_at(&tokens, 3), Some(0));
/// assert_eq!(token_index_at(&tokens, 4), Some(1));
/// assert_eq!(token_index_at(&tokens, 100), None);
/// ```
pub fn token_index_at<S: AsRef<str>>(tokens: &[S], offset: usize) -> Option<usize> {
    let mut end = 0;
    for (i, token) in tokens.iter().enumerate() {
        end += token.as_ref().len() + 1;
        if end > offset {
            return Some(i);
        }
    }
    None
}

/// Token range `[left, right)` covered by a match of `match_len` bytes at
/// `offset`, or `None` if either end falls outside the tokens.
pub fn token_span<S: AsRef<str>>(
    tokens: &[S],
    offset: usize,
    match_len: usize,
) -> Option<(usize, usize)> {
    let left = token_index_at(tokens, offset)?;
    let right = token_index_at(tokens, offset + match_len)? + 1;
    Some((left, right))
}

/// Like [`token_span`], but a match outside the tokens is a
/// [`ConcordanceError::NotFound`] naming the offending byte range.
pub fn locate_match<S: AsRef<str>>(
    tokens: &[S],
    offset: usize,
    match_len: usize,
) -> Result<(usize, usize)> {
    token_span(tokens, offset, match_len).ok_or_else(|| {
        ConcordanceError::not_found(format!(
            "bytes {offset}..{} are outside {} tokens",
            offset.saturating_add(match_len),
            tokens.len()
        ))
    })
}
