//! Command line argument parsing for the concordance CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ConcordanceConfig, HighlightMode, PivotPolicy};
use crate::corpus::text::TokenView;
use crate::error::Result;

/// Concordance - boilerplate removal, keyword-in-context search and lemma
/// co-occurrence over tokenized web texts
#[derive(Parser, Debug, Clone)]
#[command(name = "concordance")]
#[command(about = "Deduplicate, search and explore tokenized web corpora")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct ConcordanceArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "CONCORDANCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordanceArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Load the configuration file if one was given, defaults otherwise.
    pub fn load_config(&self) -> Result<ConcordanceConfig> {
        match &self.config {
            Some(path) => ConcordanceConfig::from_file(path),
            None => Ok(ConcordanceConfig::default()),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Remove boilerplate shared between the texts of each source
    Clean(CleanArgs),

    /// Search texts and print keyword-in-context windows
    Search(SearchArgs),

    /// List the lemmas that co-occur with a target lemma
    Relations(RelationsArgs),

    /// Print a lemma frequency table
    Frequency(FrequencyArgs),
}

/// Arguments for boilerplate removal
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// JSONL files, one source per file; the first record is the pivot
    #[arg(value_name = "SOURCE_FILE", required = true)]
    pub source_files: Vec<PathBuf>,

    /// Directory for the cleaned files (default: overwrite in place)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Which pivot tokens to remove in the final pass
    #[arg(long, value_enum)]
    pub pivot_policy: Option<PivotPolicyArg>,

    /// Maximum alignment table size per text pair
    #[arg(long)]
    pub max_alignment_cells: Option<usize>,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// JSONL file with the texts to search
    #[arg(value_name = "SOURCE_FILE")]
    pub source_file: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Token view to match the query against
    #[arg(short, long, default_value = "text")]
    pub part: String,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Maximum number of matching texts
    #[arg(short, long, default_value = "100")]
    pub limit: usize,

    /// Matching texts to skip
    #[arg(short, long, default_value = "0")]
    pub offset: usize,

    /// Tokens of context on each side
    #[arg(long)]
    pub pad_width: Option<usize>,

    /// Maximum matches shown per text
    #[arg(long)]
    pub max_matches_per_text: Option<usize>,
}

impl SearchArgs {
    /// The view to search; unknown names fall back to the raw text.
    pub fn view(&self) -> TokenView {
        TokenView::parse_lenient(&self.part)
    }
}

/// Arguments for co-occurrence analysis
#[derive(Parser, Debug, Clone)]
pub struct RelationsArgs {
    /// JSONL file with the texts of one source
    #[arg(value_name = "SOURCE_FILE")]
    pub source_file: PathBuf,

    /// Target lemma
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Neighbor window on each side of the target
    #[arg(short, long, default_value = "5")]
    pub width: usize,

    /// Stopword file, one word per line (default: built-in Russian list)
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Keep stopwords and punctuation in the output
    #[arg(long)]
    pub keep_noise: bool,

    /// Marker placement inside evidence snippets
    #[arg(long, value_enum)]
    pub highlight: Option<HighlightArg>,

    /// Maximum evidence snippets per neighbor
    #[arg(long)]
    pub max_evidence: Option<usize>,
}

/// Arguments for the frequency table
#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    /// JSONL file with the texts of one source
    #[arg(value_name = "SOURCE_FILE")]
    pub source_file: PathBuf,

    /// Stopword file, one word per line (default: built-in Russian list)
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Number of rows to print (default: all)
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotPolicyArg {
    Last,
    Union,
}

impl From<PivotPolicyArg> for PivotPolicy {
    fn from(arg: PivotPolicyArg) -> Self {
        match arg {
            PivotPolicyArg::Last => PivotPolicy::LastComparison,
            PivotPolicyArg::Union => PivotPolicy::Union,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightArg {
    Positional,
    FirstOccurrence,
}

impl From<HighlightArg> for HighlightMode {
    fn from(arg: HighlightArg) -> Self {
        match arg {
            HighlightArg::Positional => HighlightMode::Positional,
            HighlightArg::FirstOccurrence => HighlightMode::FirstOccurrence,
        }
    }
}
