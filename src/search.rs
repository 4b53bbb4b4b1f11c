//! Keyword-in-context search: offset mapping, window extraction and the
//! finder that ties them together.

pub mod finder;
pub mod offset;
pub mod window;

pub use finder::{ConcordanceFinder, Query};
pub use window::{ContextWindow, WindowBounds};
