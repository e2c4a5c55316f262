use crate::common::doc;
use lexica::SearchEngine;
use proptest::prelude::*;

fn doc_id_strategy() -> impl Strategy<Value = String> {
    "[a-e]"
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-d]{1,4}", 1..6).prop_map(|words| words.join(" "))
}

#[derive(Debug, Clone)]
enum Op {
    Upsert(String, String),
    Remove(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (doc_id_strategy(), text_strategy()).prop_map(|(id, text)| Op::Upsert(id, text)),
        doc_id_strategy().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn doc_count_matches_live_doc_id_set(ops in proptest::collection::vec(op_strategy(), 0..30)) {
        let mut engine = SearchEngine::new();
        let mut live = std::collections::HashSet::new();

        for op in ops {
            match op {
                Op::Upsert(id, text) => {
                    engine.upsert_documents(&[doc(&id, &text)]);
                    live.insert(id);
                }
                Op::Remove(id) => {
                    engine.remove_document(&id);
                    live.remove(&id);
                }
            }
        }

        prop_assert_eq!(engine.stats().doc_count, live.len());
    }

    #[test]
    fn idempotent_reupsert_leaves_engine_unchanged(id in doc_id_strategy(), text in text_strategy()) {
        let mut once = SearchEngine::new();
        once.upsert_documents(&[doc(&id, &text)]);

        let mut twice = SearchEngine::new();
        twice.upsert_documents(&[doc(&id, &text), doc(&id, &text)]);

        prop_assert_eq!(once.stats().doc_count, twice.stats().doc_count);
        prop_assert_eq!(once.term_count(), twice.term_count());
    }
}
