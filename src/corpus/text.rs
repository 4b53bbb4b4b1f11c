//! Tokenized text records and their four aligned token views.
//!
//! A [`TokenizedText`] carries one scraped page as four space-joined token
//! strings: the raw tokens, their shapes, their part-of-speech tags and their
//! lemmas. Index `i` names the same token in every view, so any mutation has
//! to touch all four views at the same position.
//!
//! # Examples
//!
//! ```
//! use concordance::corpus::text::{TokenView, TokenizedText};
//!
//! let text = TokenizedText::new("https://example.org/", "Коты спят .", "Xxxx xxxx .", "NOUN VERB PUNCT", "кот спать .");
//! let views = text.views().unwrap();
//! assert_eq!(views.len(), 3);
//! assert_eq!(views.get(TokenView::Lemmas)[1], "спать");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConcordanceError, Result};

/// Token delimiter shared by all four views.
pub const TOKEN_DELIMITER: char = ' ';

/// One scraped text with its aligned token views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedText {
    /// Page the text was extracted from.
    pub url: String,
    /// Extracted page title.
    #[serde(default)]
    pub title: String,
    /// Raw tokens, space-joined (punctuation is tokenized on its own).
    pub text: String,
    /// Token shapes, e.g. `Xxxx` for a capitalized word.
    pub shapes: String,
    /// Part-of-speech tags.
    pub tags: String,
    /// Lemmas (dictionary forms).
    pub lemmas: String,
    /// Number of words, excluding punctuation.
    #[serde(default)]
    pub num_words: u64,
    /// Number of sentences.
    #[serde(default)]
    pub num_sentences: u64,
}

/// Selects one of the four token views of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenView {
    #[default]
    Text,
    Shapes,
    Tags,
    Lemmas,
}

impl TokenView {
    pub const ALL: [TokenView; 4] = [
        TokenView::Text,
        TokenView::Shapes,
        TokenView::Tags,
        TokenView::Lemmas,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenView::Text => "text",
            TokenView::Shapes => "shapes",
            TokenView::Tags => "tags",
            TokenView::Lemmas => "lemmas",
        }
    }

    /// Parse a view name, falling back to [`TokenView::Text`] for anything
    /// unknown.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for TokenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenView {
    type Err = ConcordanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(TokenView::Text),
            "shapes" => Ok(TokenView::Shapes),
            "tags" => Ok(TokenView::Tags),
            "lemmas" => Ok(TokenView::Lemmas),
            other => Err(ConcordanceError::invalid_argument(format!(
                "unknown token view '{other}'"
            ))),
        }
    }
}

/// The four views of a record split into tokens, checked to be aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenViews<'a> {
    pub text: Vec<&'a str>,
    pub shapes: Vec<&'a str>,
    pub tags: Vec<&'a str>,
    pub lemmas: Vec<&'a str>,
}

impl<'a> TokenViews<'a> {
    /// Number of token positions (identical across views).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn get(&self, view: TokenView) -> &[&'a str] {
        match view {
            TokenView::Text => &self.text,
            TokenView::Shapes => &self.shapes,
            TokenView::Tags => &self.tags,
            TokenView::Lemmas => &self.lemmas,
        }
    }
}

/// Split a space-joined view into its tokens.
///
/// Consecutive spaces produce empty tokens, exactly as the upstream
/// tokenizer's output would be read back.
pub fn split_tokens(joined: &str) -> Vec<&str> {
    joined.split(TOKEN_DELIMITER).collect()
}

/// Join tokens back into a view string.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            joined.push(TOKEN_DELIMITER);
        }
        joined.push_str(token.as_ref());
    }
    joined
}

impl TokenizedText {
    /// Create a record from its URL and four views. Counters start at zero.
    pub fn new<S: Into<String>>(url: S, text: S, shapes: S, tags: S, lemmas: S) -> Self {
        TokenizedText {
            url: url.into(),
            title: String::new(),
            text: text.into(),
            shapes: shapes.into(),
            tags: tags.into(),
            lemmas: lemmas.into(),
            num_words: 0,
            num_sentences: 0,
        }
    }

    /// Set the page title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set the word and sentence counters.
    pub fn with_counts(mut self, num_words: u64, num_sentences: u64) -> Self {
        self.num_words = num_words;
        self.num_sentences = num_sentences;
        self
    }

    /// The joined string of one view.
    pub fn view(&self, view: TokenView) -> &str {
        match view {
            TokenView::Text => &self.text,
            TokenView::Shapes => &self.shapes,
            TokenView::Tags => &self.tags,
            TokenView::Lemmas => &self.lemmas,
        }
    }

    /// Split all four views and verify that they have the same length.
    pub fn views(&self) -> Result<TokenViews<'_>> {
        let views = TokenViews {
            text: split_tokens(&self.text),
            shapes: split_tokens(&self.shapes),
            tags: split_tokens(&self.tags),
            lemmas: split_tokens(&self.lemmas),
        };

        let len = views.text.len();
        if views.shapes.len() != len || views.tags.len() != len || views.lemmas.len() != len {
            return Err(ConcordanceError::MisalignedRecord {
                url: self.url.clone(),
                text: views.text.len(),
                shapes: views.shapes.len(),
                tags: views.tags.len(),
                lemmas: views.lemmas.len(),
            });
        }

        Ok(views)
    }
}
