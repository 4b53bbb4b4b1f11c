//! Configuration for deduplication, context extraction and relation search.
//!
//! All widths and caps live here rather than as literals in the algorithms.
//! A configuration file is JSON; every field is optional and falls back to
//! its default.
//!
//! # Examples
//!
//! ```
//! use concordance::config::{ConcordanceConfig, HighlightMode, PivotPolicy};
//!
//! let config = ConcordanceConfig::default();
//! assert_eq!(config.context.pad_width, 37);
//! assert_eq!(config.context.max_matches_per_text, 10);
//! assert_eq!(config.relations.evidence_width, 20);
//! assert_eq!(config.relations.highlight, HighlightMode::Positional);
//! assert_eq!(config.dedup.pivot_policy, PivotPolicy::LastComparison);
//!
//! let partial: ConcordanceConfig =
//!     serde_json::from_str(r#"{"context": {"pad_width": 5}}"#).unwrap();
//! assert_eq!(partial.context.pad_width, 5);
//! assert_eq!(partial.context.max_matches_per_text, 10);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConcordanceError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordanceConfig {
    /// Keyword-in-context window settings.
    pub context: ContextConfig,
    /// Co-occurrence settings.
    pub relations: RelationConfig,
    /// Boilerplate removal settings.
    pub dedup: DedupConfig,
}

impl ConcordanceConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConcordanceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the algorithms cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.dedup.max_alignment_cells == 0 {
            return Err(ConcordanceError::config(
                "dedup.max_alignment_cells must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Settings for context windows around search matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Tokens shown on each side of a match.
    pub pad_width: usize,
    /// Matches expanded into windows per text; the rest are dropped.
    pub max_matches_per_text: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig {
            pad_width: 37,
            max_matches_per_text: 10,
        }
    }
}

/// How the target and neighbor are marked inside an evidence snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Insert markers at the exact token positions of the hit.
    #[default]
    Positional,
    /// Replace the first textual occurrence of each token inside the
    /// snippet. A token repeated earlier in the snippet gets marked instead
    /// of the actual hit.
    FirstOccurrence,
}

/// Settings for co-occurrence analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationConfig {
    /// Raw tokens taken on each side of the target for an evidence snippet.
    pub evidence_width: usize,
    /// Marker placement strategy.
    pub highlight: HighlightMode,
    /// Evidence entries kept per neighbor. Counts are never capped.
    pub max_evidence_per_relation: Option<usize>,
}

impl Default for RelationConfig {
    fn default() -> Self {
        RelationConfig {
            evidence_width: 20,
            highlight: HighlightMode::Positional,
            max_evidence_per_relation: None,
        }
    }
}

/// Which pivot tokens are removed in the final pass of a cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPolicy {
    /// Use the alignment against the last text processed.
    #[default]
    LastComparison,
    /// Use every pivot position matched by any comparison.
    Union,
}

/// Settings for boilerplate removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    pub pivot_policy: PivotPolicy,
    /// Upper bound on `(l + 1) * (k + 1)` for a single alignment.
    pub max_alignment_cells: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        DedupConfig {
            pivot_policy: PivotPolicy::LastComparison,
            max_alignment_cells: 50_000_000,
        }
    }
}
