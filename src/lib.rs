//! # Concordance
//!
//! Alignment and context extraction for a corpus of scraped web text.
//!
//! Texts arrive already tokenized as four aligned views (raw tokens, shapes,
//! tags and lemmas). On top of them the crate provides:
//!
//! - LCS-based removal of boilerplate shared between pages of one site
//! - Keyword-in-context search with left/center/right windows
//! - Windowed lemma co-occurrence with highlighted evidence snippets
//! - Lemma frequency tables with stopword filtering

pub mod cli;
pub mod config;
pub mod corpus;
pub mod dedup;
pub mod error;
pub mod frequency;
pub mod relations;
pub mod search;
pub mod stopwords;
pub mod util;

pub mod prelude {
    pub use crate::config::ConcordanceConfig;
    pub use crate::corpus::{TokenView, TokenizedText};
    pub use crate::dedup::{CleanReport, Deduplicator};
    pub use crate::error::{ConcordanceError, Result};
    pub use crate::relations::{CooccurrenceAnalyzer, Relations};
    pub use crate::search::{ConcordanceFinder, ContextWindow, Query};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
