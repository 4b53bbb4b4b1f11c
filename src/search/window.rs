//! Left/center/right context windows around a token span.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::corpus::text::join_tokens;
use crate::util::chars::reverse_chars;

/// Token ranges of the three parts of a context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBounds {
    pub left: Range<usize>,
    pub center: Range<usize>,
    pub right: Range<usize>,
}

impl WindowBounds {
    /// Bounds for the span `[left_idx, right_idx)` padded by `pad` tokens on
    /// each side, within a sequence of `len` tokens.
    ///
    /// Out-of-range or inverted spans are clamped, so every range lies in
    /// `[0, len]`.
    pub fn new(len: usize, left_idx: usize, right_idx: usize, pad: usize) -> Self {
        let center_start = left_idx.min(len);
        let center_end = right_idx.clamp(center_start, len);

        WindowBounds {
            left: center_start.saturating_sub(pad)..center_start,
            center: center_start..center_end,
            right: center_end..center_end.saturating_add(pad).min(len),
        }
    }
}

/// A keyword-in-context result, ready to serialize for display.
///
/// Field names are part of the public JSON/CSV format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub left: String,
    pub left_reverse: String,
    pub center: String,
    pub center_reverse: String,
    pub right: String,
    /// URL of the text the match came from.
    pub source: String,
    pub title: String,
}

impl ContextWindow {
    /// Cut a window out of `tokens`.
    ///
    /// # Examples
    ///
    /// ```
    /// use concordance::search::window::{ContextWindow, WindowBounds};
    ///
    /// let tokens = ["a", "quick", "brown", "fox", "jumps"];
    /// let bounds = WindowBounds::new(tokens.len(), 2, 3, 1);
    /// let window = ContextWindow::extract(&tokens, &bounds, "https://example.org", "Foxes");
    /// assert_eq!(window.left, "quick");
    /// assert_eq!(window.center, "brown");
    /// assert_eq!(window.center_reverse, "nworb");
    /// assert_eq!(window.right, "fox");
    /// ```
    pub fn extract<S: AsRef<str>>(
        tokens: &[S],
        bounds: &WindowBounds,
        source: &str,
        title: &str,
    ) -> Self {
        let left = join_tokens(&tokens[bounds.left.clone()]);
        let center = join_tokens(&tokens[bounds.center.clone()]);
        let right = join_tokens(&tokens[bounds.right.clone()]);

        ContextWindow {
            left_reverse: reverse_chars(&left),
            center_reverse: reverse_chars(&center),
            left,
            center,
            right,
            source: source.to_string(),
            title: title.to_string(),
        }
    }
}
