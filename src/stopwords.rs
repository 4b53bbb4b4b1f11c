//! Stopword lists used to filter frequency and relation tables.
//!
//! # Examples
//!
//! ```
//! use concordance::stopwords::StopwordList;
//!
//! let list = StopwordList::russian();
//! assert!(list.contains("и"));
//! assert!(!list.contains("кот"));
//!
//! let custom = StopwordList::from_words(["the", "a"]);
//! assert_eq!(custom.len(), 2);
//! ```

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// Default Russian stop words.
const DEFAULT_RUSSIAN_STOP_WORDS: &[&str] = &[
    "а", "без", "более", "бы", "был", "была", "были", "было", "быть", "в", "вам", "вас", "весь",
    "во", "вот", "все", "всего", "всех", "вы", "где", "да", "даже", "для", "до", "его", "ее",
    "ей", "ему", "если", "есть", "еще", "же", "за", "здесь", "и", "из", "или", "им", "их", "к",
    "как", "когда", "кто", "ли", "либо", "мне", "может", "мы", "на", "надо", "наш", "не", "него",
    "нее", "нет", "ни", "них", "но", "ну", "о", "об", "однако", "он", "она", "они", "оно", "от",
    "очень", "по", "под", "при", "с", "со", "так", "также", "такой", "там", "те", "тем", "то",
    "того", "тоже", "той", "только", "том", "ты", "у", "уже", "хотя", "чего", "чей", "чем", "что",
    "чтобы", "чье", "эта", "эти", "это", "я",
];

/// A set of words to ignore when ranking tokens.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: AHashSet<String>,
}

impl StopwordList {
    /// A list that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Russian list.
    pub fn russian() -> Self {
        Self::from_words(DEFAULT_RUSSIAN_STOP_WORDS.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopwordList {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a list from a file with one word per line. Blank lines are
    /// ignored and surrounding whitespace is trimmed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        ))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
