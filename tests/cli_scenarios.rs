use std::fs;

use clap::Parser;
use concordance::cli::args::ConcordanceArgs;
use concordance::cli::commands::execute_command;
use concordance::corpus::jsonl::{load_records, save_records};
use concordance::corpus::text::TokenizedText;
use tempfile::tempdir;

fn site() -> Vec<TokenizedText> {
    vec![
        TokenizedText::new(
            "https://site.org/",
            "Home | Welcome .",
            "Xxxx | Xxxxxxx .",
            "NOUN PUNCT VERB PUNCT",
            "home | welcome .",
        )
        .with_counts(2, 1),
        TokenizedText::new(
            "https://site.org/news",
            "Home | News today .",
            "Xxxx | Xxxx xxxx .",
            "NOUN PUNCT NOUN ADV PUNCT",
            "home | news today .",
        )
        .with_counts(3, 1),
    ]
}

#[test]
fn test_clean_writes_to_output_dir() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("site.jsonl");
    let out_dir = dir.path().join("clean");
    save_records(&source, &site()).unwrap();

    let args = ConcordanceArgs::parse_from([
        "concordance".to_string(),
        "-q".to_string(),
        "-f".to_string(),
        "json".to_string(),
        "clean".to_string(),
        source.display().to_string(),
        "--output-dir".to_string(),
        out_dir.display().to_string(),
    ]);
    execute_command(args).unwrap();

    let cleaned = load_records(out_dir.join("site.jsonl")).unwrap();
    assert_eq!(cleaned[0].text, "| Welcome .");
    assert_eq!(cleaned[1].text, "| News today .");
    assert_eq!(cleaned[1].num_words, 2);

    // The input file is left as it was.
    assert_eq!(load_records(&source).unwrap(), site());
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("site.jsonl");
    let config = dir.path().join("config.json");
    save_records(&source, &site()).unwrap();
    fs::write(&config, r#"{"dedup": {"max_alignment_cells": 0}}"#).unwrap();

    let args = ConcordanceArgs::parse_from([
        "concordance".to_string(),
        "-q".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "clean".to_string(),
        source.display().to_string(),
    ]);
    assert!(execute_command(args).is_err());
    assert_eq!(load_records(&source).unwrap(), site());
}

#[test]
fn test_search_and_frequency_run() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("site.jsonl");
    save_records(&source, &site()).unwrap();

    for command in [
        vec!["search", "news"],
        vec!["relations", "news", "--width", "1"],
        vec!["frequency", "-n", "2"],
    ] {
        let mut argv = vec![
            "concordance".to_string(),
            "-q".to_string(),
            "-f".to_string(),
            "csv".to_string(),
            command[0].to_string(),
            source.display().to_string(),
        ];
        argv.extend(command[1..].iter().map(|s| s.to_string()));
        execute_command(ConcordanceArgs::parse_from(argv)).unwrap();
    }
}

#[test]
fn test_missing_source_file() {
    let dir = tempdir().unwrap();
    let args = ConcordanceArgs::parse_from([
        "concordance".to_string(),
        "frequency".to_string(),
        dir.path().join("absent.jsonl").display().to_string(),
    ]);
    assert!(execute_command(args).is_err());
}
