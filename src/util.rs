//! Shared utility modules used across concordance components.

pub mod chars;
pub mod lcs;
