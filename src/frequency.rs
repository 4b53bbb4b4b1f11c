//! Lemma frequency tables and noise filtering for ranked token lists.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::text::{TokenizedText, split_tokens};
use crate::stopwords::StopwordList;
use crate::util::chars::{is_punctuation, is_symbol};

/// A token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedToken {
    pub token: String,
    pub count: u64,
}

/// Whether `token` should be left out of a ranked list: a stopword, or made
/// entirely of punctuation or symbols.
pub fn is_noise(token: &str, stopwords: &StopwordList) -> bool {
    stopwords.contains(token) || is_punctuation(token) || is_symbol(token)
}

/// Drop noise from `counts` and sort by descending count, breaking ties by
/// token so the order is stable across runs.
pub fn rank_counts<I>(counts: I, stopwords: &StopwordList) -> Vec<RankedToken>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let mut ranked: Vec<RankedToken> = counts
        .into_iter()
        .filter(|(token, _)| !is_noise(token, stopwords))
        .map(|(token, count)| RankedToken { token, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    ranked
}

/// Lower-cased lemma counts over a set of texts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    pub fn from_texts(texts: &[TokenizedText]) -> Self {
        let mut table = FrequencyTable::default();
        for text in texts {
            table.add_text(text);
        }
        table
    }

    /// Count the lemmas of one more text. Empty tokens are skipped.
    pub fn add_text(&mut self, text: &TokenizedText) {
        for lemma in split_tokens(&text.lemmas) {
            if lemma.is_empty() {
                continue;
            }
            *self.counts.entry(lemma.to_lowercase()).or_insert(0) += 1;
        }
    }

    pub fn get(&self, lemma: &str) -> u64 {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn ranked(&self, stopwords: &StopwordList) -> Vec<RankedToken> {
        rank_counts(
            self.counts.iter().map(|(k, v)| (k.clone(), *v)),
            stopwords,
        )
    }
}
