//! Cross-page boilerplate removal.
//!
//! Pages of one site tend to repeat the same navigation, headers and footers
//! verbatim. The [`Deduplicator`] aligns every text of a source against a
//! pivot text (the first one) with an LCS and removes the matched tokens,
//! so what survives is the content specific to each page.
//!
//! Punctuation tokens are never removed; they keep sentence boundaries intact
//! when boilerplate happens to share a period or separator with content.
//!
//! # Examples
//!
//! ```
//! use concordance::corpus::text::TokenizedText;
//! use concordance::dedup::Deduplicator;
//!
//! let mut texts = vec![
//!     TokenizedText::new("a", "Menu Cats purr", "Xxxx Xxxx xxxx", "NOUN NOUN VERB", "menu cat purr").with_counts(3, 1),
//!     TokenizedText::new("b", "Menu Dogs bark", "Xxxx Xxxx xxxx", "NOUN NOUN VERB", "menu dog bark").with_counts(3, 1),
//! ];
//! let report = Deduplicator::default().clean(&mut texts).unwrap();
//! assert_eq!(texts[1].text, "Dogs bark");
//! assert_eq!(texts[0].text, "Cats purr");
//! assert_eq!(report.total_removed, 2);
//! ```

use bit_vec::BitVec;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DedupConfig, PivotPolicy};
use crate::corpus::text::{TokenView, TokenizedText, join_tokens, split_tokens};
use crate::error::{ConcordanceError, Result};
use crate::util::chars::is_punctuation;
use crate::util::lcs::{alignment_cells, longest_common_subsequence};

/// Minimum number of texts a cleaning run needs: the pivot and one more.
pub const MIN_TEXTS: usize = 2;

/// What happens to a single token position during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFate {
    Keep,
    /// Matched boilerplate; counted as removed.
    Remove,
    /// Empty token left by a double space; dropped without being counted.
    Drop,
}

/// Whether a matched token is eligible for removal.
pub fn is_removal_candidate(token: &str, matched: bool) -> bool {
    matched && !is_punctuation(token)
}

/// Decide the fate of one token.
pub fn token_fate(token: &str, matched: bool) -> TokenFate {
    if token.is_empty() {
        TokenFate::Drop
    } else if is_removal_candidate(token, matched) {
        TokenFate::Remove
    } else {
        TokenFate::Keep
    }
}

/// Outcome of a cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Removed tokens per input text, in input order; index 0 is the pivot.
    pub removed_per_text: Vec<usize>,
    /// Sum of `removed_per_text`.
    pub total_removed: usize,
}

/// LCS-based deduplicator for the texts of one source.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    config: DedupConfig,
}

impl Deduplicator {
    pub fn new(config: DedupConfig) -> Self {
        Deduplicator { config }
    }

    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Strip the boilerplate shared with the pivot (`texts[0]`) from every
    /// text, then strip the pivot's own boilerplate.
    ///
    /// All texts are validated before anything is modified; on error the
    /// slice is left untouched.
    pub fn clean(&self, texts: &mut [TokenizedText]) -> Result<CleanReport> {
        self.check_input(texts)?;

        info!(
            "Cleaning {} texts against pivot {}",
            texts.len(),
            texts[0].url
        );

        let pivot_text = texts[0].text.clone();
        let pivot_tokens = split_tokens(&pivot_text);
        let mut pivot_matches = BitVec::from_elem(pivot_tokens.len(), false);
        let mut removed_per_text = vec![0; texts.len()];
        let last = texts.len() - 1;

        for (i, text) in texts.iter_mut().enumerate().skip(1) {
            let alignment = longest_common_subsequence(&pivot_tokens, &split_tokens(&text.text));

            match self.config.pivot_policy {
                PivotPolicy::Union => {
                    for &p in &alignment.left {
                        pivot_matches.set(p, true);
                    }
                }
                PivotPolicy::LastComparison if i == last => {
                    for &p in &alignment.left {
                        pivot_matches.set(p, true);
                    }
                }
                PivotPolicy::LastComparison => {}
            }

            let matched = positions(text_len(text), &alignment.right);
            removed_per_text[i] = remove_matched(text, &matched)?;
            debug!(
                "[{}/{}] {}: removed {} tokens",
                i,
                last,
                text.url,
                removed_per_text[i]
            );
        }

        removed_per_text[0] = remove_matched(&mut texts[0], &pivot_matches)?;
        debug!(
            "Pivot {}: removed {} tokens",
            texts[0].url, removed_per_text[0]
        );

        let total_removed = removed_per_text.iter().sum();
        info!("Cleaning done, removed {total_removed} tokens");

        Ok(CleanReport {
            removed_per_text,
            total_removed,
        })
    }

    /// Clean several independent sources in parallel. Each batch gets its
    /// own result; one failing batch does not affect the others.
    pub fn clean_sources(&self, sources: &mut [Vec<TokenizedText>]) -> Vec<Result<CleanReport>> {
        sources
            .par_iter_mut()
            .map(|texts| self.clean(texts))
            .collect()
    }

    fn check_input(&self, texts: &[TokenizedText]) -> Result<()> {
        if texts.len() < MIN_TEXTS {
            return Err(ConcordanceError::InsufficientInput {
                needed: MIN_TEXTS,
                got: texts.len(),
            });
        }

        let pivot_len = texts[0].views()?.len();
        for text in &texts[1..] {
            let len = text.views()?.len();
            let cells = alignment_cells(pivot_len, len);
            if cells > self.config.max_alignment_cells {
                return Err(ConcordanceError::InputTooLarge {
                    url: text.url.clone(),
                    cells,
                    limit: self.config.max_alignment_cells,
                });
            }
        }
        Ok(())
    }
}

fn text_len(text: &TokenizedText) -> usize {
    split_tokens(&text.text).len()
}

fn positions(len: usize, indices: &[usize]) -> BitVec {
    let mut set = BitVec::from_elem(len, false);
    for &i in indices {
        set.set(i, true);
    }
    set
}

/// Apply the removal rule to all four views of `text` and return how many
/// tokens were removed.
fn remove_matched(text: &mut TokenizedText, matched: &BitVec) -> Result<usize> {
    let views = text.views()?;
    let fates: Vec<TokenFate> = views
        .text
        .iter()
        .enumerate()
        .map(|(i, token)| token_fate(token, matched.get(i).unwrap_or(false)))
        .collect();
    let removed = fates.iter().filter(|f| **f == TokenFate::Remove).count();

    let [new_text, new_shapes, new_tags, new_lemmas] = TokenView::ALL.map(|view| {
        let kept: Vec<&str> = views
            .get(view)
            .iter()
            .zip(&fates)
            .filter(|(_, fate)| **fate == TokenFate::Keep)
            .map(|(token, _)| *token)
            .collect();
        join_tokens(&kept)
    });

    text.text = new_text;
    text.shapes = new_shapes;
    text.tags = new_tags;
    text.lemmas = new_lemmas;
    text.num_words = text.num_words.saturating_sub(removed as u64);

    Ok(removed)
}
