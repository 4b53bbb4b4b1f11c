//! Tokenized text records and their on-disk JSON Lines form.

pub mod jsonl;
pub mod text;

pub use text::{TokenView, TokenViews, TokenizedText};
