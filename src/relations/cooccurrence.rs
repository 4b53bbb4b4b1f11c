//! Windowed co-occurrence of lemmas around a target lemma.
//!
//! For every position whose lemma equals the target, each other lemma
//! within `width` positions on either side counts as one co-occurrence. Every
//! hit also records an evidence snippet: a stretch of raw text around the
//! target with both tokens marked.
//!
//! # Examples
//!
//! ```
//! use concordance::corpus::text::TokenizedText;
//! use concordance::relations::cooccurrence::CooccurrenceAnalyzer;
//!
//! let texts = vec![TokenizedText::new(
//!     "https://example.org/",
//!     "Black cats sleep",
//!     "Xxxxx xxxx xxxx",
//!     "ADJ NOUN VERB",
//!     "black cat sleep",
//! )];
//! let relations = CooccurrenceAnalyzer::default().analyze(&texts, "cat", 1).unwrap();
//! assert_eq!(relations.count("black"), 1);
//! assert_eq!(relations.count("sleep"), 1);
//! assert!(!relations.contains("cat"));
//! assert_eq!(relations.get("black").unwrap().evidence[0].snippet, "!>Black<! ?>cats<? sleep");
//! ```

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RelationConfig;
use crate::corpus::text::{TokenView, TokenizedText};
use crate::error::{ConcordanceError, Result};
use crate::frequency::is_noise;
use crate::relations::highlight::highlight_snippet;
use crate::stopwords::StopwordList;

/// A highlighted excerpt supporting one co-occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub snippet: String,
    /// URL of the text the snippet was cut from.
    pub source: String,
}

/// How often a neighbor occurred near the target, with its evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub count: u64,
    pub evidence: Vec<Evidence>,
}

/// A neighbor lemma and its relation, as listed in ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRelation {
    pub lemma: String,
    pub count: u64,
    pub evidence: Vec<Evidence>,
}

/// Neighbor lemma → relation, for a single target.
#[derive(Debug, Clone, Default)]
pub struct Relations {
    target: String,
    entries: AHashMap<String, Relation>,
}

impl Relations {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn get(&self, lemma: &str) -> Option<&Relation> {
        self.entries.get(lemma)
    }

    pub fn count(&self, lemma: &str) -> u64 {
        self.entries.get(lemma).map_or(0, |r| r.count)
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.entries.contains_key(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop stopwords and neighbors made only of punctuation or symbols.
    pub fn remove_noise(&mut self, stopwords: &StopwordList) {
        self.entries.retain(|lemma, _| !is_noise(lemma, stopwords));
    }

    /// Neighbors by descending count; ties are ordered by lemma.
    pub fn ranked(self) -> Vec<RankedRelation> {
        let mut ranked: Vec<RankedRelation> = self
            .entries
            .into_iter()
            .map(|(lemma, relation)| RankedRelation {
                lemma,
                count: relation.count,
                evidence: relation.evidence,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.lemma.cmp(&b.lemma)));
        ranked
    }
}

/// One neighbor hit found in a text, before merging.
struct Hit {
    lemma: String,
    evidence: Evidence,
}

/// Scans texts for the neighbors of a target lemma.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceAnalyzer {
    config: RelationConfig,
}

impl CooccurrenceAnalyzer {
    pub fn new(config: RelationConfig) -> Self {
        CooccurrenceAnalyzer { config }
    }

    /// Collect the neighbors of `target` within `width` positions across
    /// `texts`. The target itself never appears in the result.
    pub fn analyze(
        &self,
        texts: &[TokenizedText],
        target: &str,
        width: usize,
    ) -> Result<Relations> {
        if target.is_empty() {
            return Err(ConcordanceError::invalid_argument("empty target lemma"));
        }

        let per_text = texts
            .par_iter()
            .map(|text| self.hits_in_text(text, target, width))
            .collect::<Result<Vec<_>>>()?;

        let mut relations = Relations {
            target: target.to_string(),
            entries: AHashMap::new(),
        };
        let evidence_cap = self.config.max_evidence_per_relation.unwrap_or(usize::MAX);

        for hit in per_text.into_iter().flatten() {
            let relation = relations.entries.entry(hit.lemma).or_default();
            relation.count += 1;
            if relation.evidence.len() < evidence_cap {
                relation.evidence.push(hit.evidence);
            }
        }
        relations.entries.remove(target);

        debug!(
            "Found {} neighbors of '{}' in {} texts",
            relations.len(),
            target,
            texts.len()
        );
        Ok(relations)
    }

    fn hits_in_text(&self, text: &TokenizedText, target: &str, width: usize) -> Result<Vec<Hit>> {
        let views = text.views()?;
        let lemmas = views.get(TokenView::Lemmas);
        let raw = views.get(TokenView::Text);
        let mut hits = Vec::new();

        for (i, _) in lemmas.iter().enumerate().filter(|(_, l)| **l == target) {
            let lo = i.saturating_sub(width);
            let hi = i.saturating_add(width).min(lemmas.len() - 1);

            for j in (lo..=hi).filter(|&j| j != i && !lemmas[j].is_empty()) {
                hits.push(Hit {
                    lemma: lemmas[j].to_string(),
                    evidence: Evidence {
                        snippet: self.snippet(raw, i, j),
                        source: text.url.clone(),
                    },
                });
            }
        }

        Ok(hits)
    }

    /// Raw tokens within `evidence_width` of the target, widened if needed
    /// so the neighbor is always inside.
    fn snippet(&self, raw: &[&str], target: usize, neighbor: usize) -> String {
        let reach = self.config.evidence_width;
        let start = target.saturating_sub(reach).min(neighbor);
        let end = target
            .saturating_add(reach)
            .max(neighbor)
            .min(raw.len() - 1);

        highlight_snippet(
            &raw[start..=end],
            target - start,
            neighbor - start,
            self.config.highlight,
        )
    }
}
