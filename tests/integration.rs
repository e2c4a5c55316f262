//! Engine-level lifecycle behavior not already covered by `tests/search.rs`.

#[path = "common/mod.rs"]
mod common;

use common::doc;
use lexica::{SearchEngine, SearchOptions};

#[test]
fn later_document_with_same_id_wins_within_one_upsert_call() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[doc("d1", "first version"), doc("d1", "second version")]);

    let stored = engine.get_document("d1").unwrap();
    assert_eq!(stored.text, "second version");
    assert_eq!(engine.stats().doc_count, 1);
}

#[test]
fn remove_document_is_a_no_op_for_unknown_id() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[doc("d1", "hello")]);
    engine.remove_document("does-not-exist");
    assert_eq!(engine.stats().doc_count, 1);
}

#[test]
fn remove_then_readd_restores_searchability() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[doc("d1", "hello world")]);
    engine.remove_document("d1");
    assert_eq!(engine.stats().doc_count, 0);

    let empty = engine.search(
        "hello",
        &SearchOptions {
            enable_prefix: false,
            ..SearchOptions::default()
        },
    );
    assert!(empty.hits.is_empty());

    engine.upsert_documents(&[doc("d1", "hello world")]);
    let found = engine.search(
        "hello",
        &SearchOptions {
            enable_prefix: false,
            ..SearchOptions::default()
        },
    );
    assert_eq!(found.hits.len(), 1);
}

#[test]
fn empty_query_returns_no_hits_and_no_cursor() {
    let mut engine = SearchEngine::new();
    engine.upsert_documents(&[doc("d1", "hello world")]);

    let page = engine.search("", &SearchOptions::default());
    assert!(page.hits.is_empty());
    assert!(page.next_cursor.is_none());
}

#[test]
fn metadata_round_trips_through_the_document_registry() {
    let mut engine = SearchEngine::new();
    let mut metadata = std::collections::HashMap::new();
    metadata.insert(
        "category".to_string(),
        serde_json::Value::String("news".to_string()),
    );
    engine.upsert_documents(&[lexica::DocumentInput {
        id: "d1".to_string(),
        text: "hello".to_string(),
        metadata: Some(metadata.clone()),
    }]);

    let stored = engine.get_document("d1").unwrap();
    assert_eq!(stored.metadata, Some(metadata));
}
