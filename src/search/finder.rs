//! Keyword-in-context search over tokenized texts.
//!
//! A query is a plain substring matched against one token view of every
//! text. Each hit is mapped from byte offsets to a token span and expanded
//! into a [`ContextWindow`] cut from the raw tokens, whichever view was
//! searched.

use std::borrow::Cow;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ContextConfig;
use crate::corpus::text::{TokenView, TokenizedText, split_tokens};
use crate::error::{ConcordanceError, Result};
use crate::search::offset::locate_match;
use crate::search::window::{ContextWindow, WindowBounds};
use crate::util::chars::find_all;

/// Default and maximum number of matching texts returned per request.
pub const MAX_TEXTS_PER_QUERY: usize = 100;

/// A substring query against one token view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub view: TokenView,
    pub case_sensitive: bool,
    /// Matching texts to skip before collecting results.
    pub offset: usize,
    /// Matching texts to collect, capped at [`MAX_TEXTS_PER_QUERY`].
    pub limit: usize,
}

impl Query {
    /// A case-insensitive query against the raw text view.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Query {
            text: text.into(),
            view: TokenView::Text,
            case_sensitive: false,
            offset: 0,
            limit: MAX_TEXTS_PER_QUERY,
        }
    }

    pub fn view(mut self, view: TokenView) -> Self {
        self.view = view;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_TEXTS_PER_QUERY);
        self
    }
}

/// Finds query matches and expands them into context windows.
#[derive(Debug, Clone, Default)]
pub struct ConcordanceFinder {
    config: ContextConfig,
}

impl ConcordanceFinder {
    pub fn new(config: ContextConfig) -> Self {
        ConcordanceFinder { config }
    }

    /// Search `texts` and return the windows of every match, grouped by text
    /// in input order.
    pub fn find(&self, texts: &[TokenizedText], query: &Query) -> Result<Vec<ContextWindow>> {
        if query.text.is_empty() {
            return Err(ConcordanceError::invalid_argument("empty query"));
        }

        let needle = if query.case_sensitive {
            Cow::Borrowed(query.text.as_str())
        } else {
            Cow::Owned(query.text.to_lowercase())
        };

        let per_text = texts
            .par_iter()
            .map(|text| self.find_in_text(text, &needle, query))
            .collect::<Result<Vec<_>>>()?;

        Ok(per_text
            .into_iter()
            .filter(|windows| !windows.is_empty())
            .skip(query.offset)
            .take(query.limit.min(MAX_TEXTS_PER_QUERY))
            .flatten()
            .collect())
    }

    /// Windows for the matches of `needle` inside a single text, at most
    /// `max_matches_per_text` of them.
    pub fn find_in_text(
        &self,
        text: &TokenizedText,
        needle: &str,
        query: &Query,
    ) -> Result<Vec<ContextWindow>> {
        let views = text.views()?;
        let haystack = if query.case_sensitive {
            Cow::Borrowed(text.view(query.view))
        } else {
            Cow::Owned(text.view(query.view).to_lowercase())
        };

        let offsets = find_all(&haystack, needle);
        if offsets.is_empty() {
            return Ok(Vec::new());
        }

        let view_tokens = split_tokens(&haystack);
        let raw = views.get(TokenView::Text);
        let mut windows = Vec::new();

        for offset in offsets.into_iter().take(self.config.max_matches_per_text) {
            let (left, right) = match locate_match(&view_tokens, offset, needle.len()) {
                Ok(span) => span,
                Err(ConcordanceError::NotFound(msg)) => {
                    debug!("{}: skipping match, {msg}", text.url);
                    continue;
                }
                Err(e) => return Err(e),
            };
            let bounds = WindowBounds::new(raw.len(), left, right, self.config.pad_width);
            windows.push(ContextWindow::extract(raw, &bounds, &text.url, &text.title));
        }

        Ok(windows)
    }
}
