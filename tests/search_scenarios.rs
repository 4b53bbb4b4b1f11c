use concordance::config::ContextConfig;
use concordance::corpus::text::{TokenView, TokenizedText, split_tokens};
use concordance::search::offset::{token_index_at, token_span};
use concordance::search::{ConcordanceFinder, Query};

fn record(url: &str, raw: &str, lemmas: &str) -> TokenizedText {
    let n = split_tokens(raw).len();
    let filler = vec!["x"; n].join(" ");
    TokenizedText::new(url, raw, filler.as_str(), filler.as_str(), lemmas).with_title("Page")
}

#[test]
fn test_every_token_start_maps_to_its_index() {
    let tokens = ["В", "лесу", "родилась", "ёлочка", "."];
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(token_index_at(&tokens, offset), Some(i));
        // Every byte of a multi-byte token still belongs to it.
        assert_eq!(token_index_at(&tokens, offset + token.len() - 1), Some(i));
        offset += token.len() + 1;
    }
    assert_eq!(token_span(&tokens, 0, tokens[0].len()), Some((0, 1)));
}

#[test]
fn test_windows_are_padded_and_clipped() {
    let raw = (0..20).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let texts = vec![record("https://example.org/", &raw, &raw)];
    let finder = ConcordanceFinder::new(ContextConfig {
        pad_width: 3,
        max_matches_per_text: 10,
    });

    let windows = finder.find(&texts, &Query::new("w10")).unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].left, "w7 w8 w9");
    assert_eq!(windows[0].center, "w10");
    assert_eq!(windows[0].right, "w11 w12 w13");
    assert_eq!(windows[0].left_reverse, "9w 8w 7w");

    let windows = finder.find(&texts, &Query::new("w19")).unwrap();
    assert_eq!(windows[0].right, "");
    assert_eq!(windows[0].left, "w16 w17 w18");

    let windows = finder.find(&texts, &Query::new("w0 w1")).unwrap();
    assert_eq!(windows[0].left, "");
    assert_eq!(windows[0].center, "w0 w1");
}

#[test]
fn test_search_by_lemma_across_texts() {
    let texts = vec![
        record("https://a.org/", "Коты спят .", "кот спать ."),
        record("https://b.org/", "Собака лает .", "собака лаять ."),
        record("https://c.org/", "Кот ест .", "кот есть ."),
    ];
    let query = Query::new("кот").view(TokenView::Lemmas);
    let windows = ConcordanceFinder::default().find(&texts, &query).unwrap();

    let centers: Vec<&str> = windows.iter().map(|w| w.center.as_str()).collect();
    assert_eq!(centers, vec!["Коты", "Кот"]);
    assert_eq!(windows[1].source, "https://c.org/");
    assert_eq!(windows[1].title, "Page");
}

#[test]
fn test_misaligned_record_fails_search() {
    let mut bad = record("https://bad.org/", "a b c", "a b c");
    bad.shapes = "x x".to_string();
    assert!(ConcordanceFinder::default().find(&[bad], &Query::new("b")).is_err());
}
