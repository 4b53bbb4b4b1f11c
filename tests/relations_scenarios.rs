use concordance::config::RelationConfig;
use concordance::corpus::text::{TokenizedText, split_tokens};
use concordance::frequency::FrequencyTable;
use concordance::relations::CooccurrenceAnalyzer;
use concordance::stopwords::StopwordList;

fn record(url: &str, raw: &str, lemmas: &str) -> TokenizedText {
    let n = split_tokens(raw).len();
    let filler = vec!["x"; n].join(" ");
    TokenizedText::new(url, raw, filler.as_str(), filler.as_str(), lemmas)
}

fn corpus() -> Vec<TokenizedText> {
    vec![
        record("a", "Кошка и собака дружат .", "кошка и собака дружить ."),
        record("b", "Собака лает , кошка спит .", "собака лаять , кошка спать ."),
        record("c", "Собака с собакой .", "собака с собака ."),
    ]
}

#[test]
fn test_neighbors_ranked_without_noise() {
    let mut relations = CooccurrenceAnalyzer::default()
        .analyze(&corpus(), "собака", 3)
        .unwrap();
    assert!(!relations.contains("собака"));
    relations.remove_noise(&StopwordList::russian());

    let ranked = relations.ranked();
    let lemmas: Vec<&str> = ranked.iter().map(|r| r.lemma.as_str()).collect();
    assert_eq!(lemmas, vec!["кошка", "дружить", "лаять"]);
    assert_eq!(ranked[0].count, 2);
    assert_eq!(ranked[0].evidence.len(), 2);
    assert_eq!(ranked[0].evidence[0].source, "a");
}

#[test]
fn test_evidence_marks_target_and_neighbor() {
    let analyzer = CooccurrenceAnalyzer::new(RelationConfig {
        evidence_width: 1,
        ..RelationConfig::default()
    });
    let relations = analyzer.analyze(&corpus()[1..2], "кошка", 1).unwrap();
    let evidence = &relations.get("спать").unwrap().evidence[0];
    assert_eq!(evidence.snippet, ", ?>кошка<? !>спит<!");
    assert_eq!(evidence.source, "b");
}

#[test]
fn test_frequency_table_over_corpus() {
    let ranked = FrequencyTable::from_texts(&corpus()).ranked(&StopwordList::russian());
    assert_eq!(ranked[0].token, "собака");
    assert_eq!(ranked[0].count, 4);
    assert!(ranked.iter().all(|r| r.token != "и" && r.token != "."));
}
