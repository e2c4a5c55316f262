use crate::common::doc;
use lexica::{SearchEngine, SearchOptions};

#[test]
fn s1_basic_tfidf_order() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[
        doc("d1", "hello world world"),
        doc("d2", "hello there"),
        doc("d3", "unrelated"),
    ]);

    let page = engine.search(
        "hello world",
        &SearchOptions {
            limit: 10,
            enable_prefix: false,
            ..SearchOptions::default()
        },
    );

    let ids: Vec<&str> = page.hits.iter().map(|h| h.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["d1", "d2"]);
    assert!(page.hits[0].score > page.hits[1].score);
}

#[test]
fn s2_prefix_completion_contributes() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[
        doc("d1", "typescript"),
        doc("d2", "type theory"),
        doc("d3", "python"),
    ]);

    let page = engine.search(
        "typ",
        &SearchOptions {
            enable_prefix: true,
            prefix_limit: 10,
            ..SearchOptions::default()
        },
    );

    let ids: Vec<&str> = page.hits.iter().map(|h| h.doc_id.as_str()).collect();
    assert!(ids.contains(&"d1"));
    assert!(ids.contains(&"d2"));
    assert!(!ids.contains(&"d3"));
}

#[test]
fn s3_cursor_pagination_visits_every_hit_once() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[doc("a", "cat"), doc("b", "cat cat"), doc("c", "cat cat cat")]);

    let first = engine.search(
        "cat",
        &SearchOptions {
            limit: 2,
            enable_prefix: false,
            ..SearchOptions::default()
        },
    );
    assert_eq!(
        first.hits.iter().map(|h| h.doc_id.as_str()).collect::<Vec<_>>(),
        vec!["c", "b"]
    );
    assert!(first.next_cursor.is_some());

    let second = engine.search(
        "cat",
        &SearchOptions {
            limit: 2,
            enable_prefix: false,
            cursor: first.next_cursor,
            ..SearchOptions::default()
        },
    );
    assert_eq!(
        second.hits.iter().map(|h| h.doc_id.as_str()).collect::<Vec<_>>(),
        vec!["a"]
    );
    assert!(second.next_cursor.is_none());
}

#[test]
fn s4_stop_word_asymmetry() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[doc("d1", "the quick fox")]);

    let page = engine.search(
        "the",
        &SearchOptions {
            enable_prefix: false,
            ..SearchOptions::default()
        },
    );
    assert!(page.hits.is_empty());
}

#[test]
fn s5_candidate_limit_keeps_only_top_scoring() {
    let mut engine = SearchEngine::new();
    let docs: Vec<_> = (0..100)
        .map(|i| doc(&format!("d{i}"), &"shared ".repeat(100 - i)))
        .collect();
    engine.upsert_documents(&docs);

    let page = engine.search(
        "shared",
        &SearchOptions {
            limit: 100,
            enable_prefix: false,
            candidate_limit: Some(10),
            ..SearchOptions::default()
        },
    );
    assert!(page.hits.len() <= 10);
    // d0 repeats "shared" 100 times, the highest raw frequency in the corpus.
    assert!(page.hits.iter().any(|h| h.doc_id == "d0"));
}

#[test]
fn s6_top_k_with_ties_orders_by_score_then_id() {
    use lexica::topk::top_k;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        score: i64,
    }

    let items = vec![
        Item { id: "b", score: 1 },
        Item { id: "a", score: 1 },
        Item { id: "c", score: 2 },
    ];
    let cmp = |x: &Item, y: &Item| y.score.cmp(&x.score).then_with(|| x.id.cmp(y.id));
    let result = top_k(items, 2, cmp);
    assert_eq!(
        result,
        vec![Item { id: "c", score: 2 }, Item { id: "a", score: 1 }]
    );
}
