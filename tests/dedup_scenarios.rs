use concordance::config::{DedupConfig, PivotPolicy};
use concordance::corpus::text::{TokenView, TokenizedText, split_tokens};
use concordance::dedup::Deduplicator;
use concordance::error::ConcordanceError;

/// A record whose shapes, tags and lemmas are derived from the raw tokens so
/// the four views stay aligned.
fn record(url: &str, raw: &str) -> TokenizedText {
    let tokens = split_tokens(raw);
    let shapes: Vec<String> = tokens.iter().map(|t| format!("s{}", t.len())).collect();
    let tags: Vec<&str> = tokens
        .iter()
        .map(|t| if t.chars().all(char::is_alphabetic) { "WORD" } else { "PUNCT" })
        .collect();
    let n = tokens.len() as u64;

    TokenizedText::new(
        url.to_string(),
        raw.to_string(),
        shapes.join(" "),
        tags.join(" "),
        raw.to_lowercase(),
    )
    .with_counts(n, 1)
}

fn assert_aligned(texts: &[TokenizedText]) {
    for text in texts {
        let views = text.views().unwrap();
        for view in TokenView::ALL {
            assert_eq!(views.get(view).len(), views.len(), "{} {view}", text.url);
        }
    }
}

#[test]
fn test_navigation_is_removed_and_separators_kept() {
    let mut texts = vec![
        record("https://site.org/", "Home | About | Welcome to the site ."),
        record("https://site.org/cats", "Home | About | Today we discuss cats ."),
    ];

    let report = Deduplicator::default().clean(&mut texts).unwrap();

    assert_eq!(texts[1].text, "| | Today we discuss cats .");
    assert_eq!(texts[1].lemmas, "| | today we discuss cats .");
    assert_eq!(texts[1].tags, "PUNCT PUNCT WORD WORD WORD WORD PUNCT");
    assert_eq!(texts[1].num_words, 7);
    assert_eq!(texts[1].num_sentences, 1);

    assert_eq!(texts[0].text, "| | Welcome to the site .");
    assert_eq!(report.removed_per_text, vec![2, 2]);
    assert_eq!(report.total_removed, 4);
    assert_aligned(&texts);
}

#[test]
fn test_second_run_removes_nothing() {
    let mut texts = vec![
        record("a", "Menu Login Cats purr softly . Footer"),
        record("b", "Menu Login Dogs bark loudly . Footer"),
        record("c", "Menu Login Birds sing . Footer"),
    ];
    let deduplicator = Deduplicator::default();
    deduplicator.clean(&mut texts).unwrap();
    let after_first = texts.clone();

    let report = deduplicator.clean(&mut texts).unwrap();
    assert_eq!(report.total_removed, 0);
    assert_eq!(texts, after_first);
    assert_aligned(&texts);
}

#[test]
fn test_crossing_alignment_leaves_more_for_a_second_run() {
    // "a b" against "b a" can only match one of the two tokens, so the
    // other survives the first run and matches the pivot on the next one.
    let mut texts = vec![record("pivot", "a b"), record("swapped", "b a"), record("other", "z")];
    let deduplicator = Deduplicator::default();

    let first = deduplicator.clean(&mut texts).unwrap();
    assert_eq!(first.removed_per_text, vec![0, 1, 0]);
    assert_eq!(texts[1].text, "b");

    let second = deduplicator.clean(&mut texts).unwrap();
    assert_eq!(second.removed_per_text, vec![0, 1, 0]);
    assert_eq!(texts[1].text, "");
    assert_eq!(texts[0].text, "a b");
    assert_aligned(&texts);

    let third = deduplicator.clean(&mut texts).unwrap();
    assert_eq!(third.total_removed, 0);
}

#[test]
fn test_pivot_policy_changes_pivot_only() {
    let texts = vec![
        record("pivot", "Alpha Beta Gamma body"),
        record("one", "Alpha first"),
        record("two", "Beta second"),
    ];

    let mut last = texts.clone();
    Deduplicator::default().clean(&mut last).unwrap();
    let mut union = texts.clone();
    Deduplicator::new(DedupConfig {
        pivot_policy: PivotPolicy::Union,
        ..DedupConfig::default()
    })
    .clean(&mut union)
    .unwrap();

    assert_eq!(last[0].text, "Alpha Gamma body");
    assert_eq!(union[0].text, "Gamma body");
    assert_eq!(last[1..], union[1..]);
    assert_eq!(last[1].text, "first");
    assert_eq!(last[2].text, "second");
}

#[test]
fn test_result_depends_on_record_order() {
    let texts = vec![
        record("a", "Alpha Beta body"),
        record("b", "Beta Alpha first"),
        record("c", "Beta second"),
    ];
    let mut forward = texts.clone();
    Deduplicator::default().clean(&mut forward).unwrap();

    let mut reordered = vec![texts[2].clone(), texts[1].clone(), texts[0].clone()];
    Deduplicator::default().clean(&mut reordered).unwrap();

    // Against "Alpha Beta body" the tie between the two one-token alignments
    // resolves to "Alpha"; against "Beta second" only "Beta" can match.
    assert_eq!(forward[1].text, "Beta first");
    assert_eq!(reordered[1].text, "Alpha first");
}

#[test]
fn test_failed_batch_leaves_other_sources_cleaned() {
    let mut misaligned = record("bad", "Menu broken");
    misaligned.lemmas = "menu".to_string();

    let mut sources = vec![
        vec![record("a", "Menu one"), record("b", "Menu two")],
        vec![record("c", "Menu three"), misaligned.clone()],
        vec![record("d", "lonely")],
    ];
    let reports = Deduplicator::default().clean_sources(&mut sources);

    assert_eq!(reports[0].as_ref().unwrap().total_removed, 2);
    assert!(matches!(
        reports[1],
        Err(ConcordanceError::MisalignedRecord { .. })
    ));
    assert!(matches!(
        reports[2],
        Err(ConcordanceError::InsufficientInput { needed: 2, got: 1 })
    ));
    assert_eq!(sources[0][1].text, "two");
    assert_eq!(sources[1][0].text, "Menu three");
    assert_eq!(sources[1][1], misaligned);
}
