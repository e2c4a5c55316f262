use crate::common::doc;
use lexica::tokenizer::{tokenize, TokenizeOptions};
use lexica::{SearchEngine, SearchOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokenizer_round_trip_on_alphanumeric_text(
        words in proptest::collection::vec("[A-Za-z0-9]{1,8}", 1..10)
    ) {
        let text = words.join(" ");
        let options = TokenizeOptions {
            normalize_case: true,
            remove_stop_words: false,
        };
        let terms: Vec<String> = tokenize(&text, options).map(|t| t.term).collect();
        prop_assert_eq!(terms.join(" "), text.to_ascii_lowercase());
    }

    #[test]
    fn cursor_pagination_visits_every_hit_exactly_once(
        count in 1usize..15,
        limit in 1usize..5,
    ) {
        let mut engine = SearchEngine::new();
        let docs: Vec<_> = (0..count)
            .map(|i| doc(&format!("d{i}"), &"shared".repeat(i + 1)))
            .collect();
        engine.upsert_documents(&docs);

        let mut seen = Vec::new();
        let mut cursor = None;
        loop {
            let page = engine.search(
                "shared",
                &SearchOptions {
                    limit,
                    cursor: cursor.clone(),
                    enable_prefix: false,
                    ..SearchOptions::default()
                },
            );
            if page.hits.is_empty() {
                break;
            }
            seen.extend(page.hits.iter().map(|h| h.doc_id.clone()));
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        let mut expected: Vec<String> = docs.iter().map(|d| d.id.clone()).collect();
        expected.sort();
        let mut seen_sorted = seen.clone();
        seen_sorted.sort();

        prop_assert_eq!(seen.len(), count);
        prop_assert_eq!(seen_sorted, expected);
    }
}
