//! Command implementations for the concordance CLI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ConcordanceConfig;
use crate::corpus::jsonl::{load_records, save_records};
use crate::corpus::text::TokenizedText;
use crate::dedup::Deduplicator;
use crate::error::{ConcordanceError, Result};
use crate::frequency::FrequencyTable;
use crate::relations::CooccurrenceAnalyzer;
use crate::search::{ConcordanceFinder, Query};
use crate::stopwords::StopwordList;

/// Execute a CLI command.
pub fn execute_command(args: ConcordanceArgs) -> Result<()> {
    let config = args.load_config()?;
    match &args.command {
        Command::Clean(clean_args) => clean_sources(clean_args, config, &args),
        Command::Search(search_args) => search_texts(search_args, config, &args),
        Command::Relations(relations_args) => find_relations(relations_args, config, &args),
        Command::Frequency(frequency_args) => show_frequency(frequency_args, &args),
    }
}

/// Clean every source file, in parallel, and write the results.
fn clean_sources(
    args: &CleanArgs,
    mut config: ConcordanceConfig,
    cli_args: &ConcordanceArgs,
) -> Result<()> {
    if let Some(policy) = args.pivot_policy {
        config.dedup.pivot_policy = policy.into();
    }
    if let Some(cells) = args.max_alignment_cells {
        config.dedup.max_alignment_cells = cells;
    }
    config.validate()?;

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let start_time = Instant::now();
    let mut sources = args
        .source_files
        .iter()
        .map(load_records)
        .collect::<Result<Vec<Vec<TokenizedText>>>>()?;

    let deduplicator = Deduplicator::new(config.dedup);
    let reports = deduplicator.clean_sources(&mut sources);

    let mut results = Vec::with_capacity(sources.len());
    let mut total_removed = 0;
    for ((path, texts), report) in args.source_files.iter().zip(&sources).zip(reports) {
        let file = path.display().to_string();
        match report {
            Ok(report) => {
                let destination = output_path(path, args.output_dir.as_deref())?;
                save_records(&destination, texts)?;
                info!(
                    "{file}: removed {} tokens, wrote {}",
                    report.total_removed,
                    destination.display()
                );
                total_removed += report.total_removed;
                results.push(SourceCleanResult {
                    file,
                    texts: texts.len(),
                    total_removed: report.total_removed,
                    error: None,
                });
            }
            Err(e) => {
                warn!("{file}: {e}");
                results.push(SourceCleanResult {
                    file,
                    texts: texts.len(),
                    total_removed: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    output_result(
        "Cleaning finished",
        &CleanSummary {
            sources: results,
            total_removed,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Where the cleaned version of `source` is written.
pub fn output_path(source: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    match output_dir {
        None => Ok(source.to_path_buf()),
        Some(dir) => {
            let name = source.file_name().ok_or_else(|| {
                ConcordanceError::invalid_argument(format!(
                    "{} has no file name",
                    source.display()
                ))
            })?;
            Ok(dir.join(name))
        }
    }
}

/// Print keyword-in-context windows for a query.
fn search_texts(
    args: &SearchArgs,
    mut config: ConcordanceConfig,
    cli_args: &ConcordanceArgs,
) -> Result<()> {
    if let Some(pad_width) = args.pad_width {
        config.context.pad_width = pad_width;
    }
    if let Some(max_matches) = args.max_matches_per_text {
        config.context.max_matches_per_text = max_matches;
    }

    let texts = load_records(&args.source_file)?;
    let query = Query::new(args.query.as_str())
        .view(args.view())
        .case_sensitive(args.case_sensitive)
        .offset(args.offset)
        .limit(args.limit);

    let windows = ConcordanceFinder::new(config.context).find(&texts, &query)?;
    info!("{} windows for '{}' in {} texts", windows.len(), query.text, texts.len());

    output_result(
        &format!("Matches for '{}' in {}", query.text, query.view),
        &windows,
        cli_args,
    )
}

/// Print the neighbors of a target lemma, most frequent first.
fn find_relations(
    args: &RelationsArgs,
    mut config: ConcordanceConfig,
    cli_args: &ConcordanceArgs,
) -> Result<()> {
    if let Some(highlight) = args.highlight {
        config.relations.highlight = highlight.into();
    }
    if let Some(max_evidence) = args.max_evidence {
        config.relations.max_evidence_per_relation = Some(max_evidence);
    }

    let texts = load_records(&args.source_file)?;
    let mut relations =
        CooccurrenceAnalyzer::new(config.relations).analyze(&texts, &args.target, args.width)?;
    if !args.keep_noise {
        relations.remove_noise(&load_stopwords(args.stopwords.as_deref())?);
    }

    output_result(
        &format!("Relations of '{}'", args.target),
        &relations.ranked(),
        cli_args,
    )
}

/// Print lemma frequencies for a source.
fn show_frequency(args: &FrequencyArgs, cli_args: &ConcordanceArgs) -> Result<()> {
    let texts = load_records(&args.source_file)?;
    let stopwords = load_stopwords(args.stopwords.as_deref())?;
    let mut ranked = FrequencyTable::from_texts(&texts).ranked(&stopwords);
    if let Some(top) = args.top {
        ranked.truncate(top);
    }

    output_result("Lemma frequencies", &ranked, cli_args)
}

fn load_stopwords(path: Option<&Path>) -> Result<StopwordList> {
    match path {
        Some(path) => StopwordList::from_file(path),
        None => Ok(StopwordList::russian()),
    }
}
