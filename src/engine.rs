//! The search engine: owns the document registry and the three index
//! structures, and exposes the only two operations that mutate state
//! (`upsert_documents`, `remove_document`) plus the one that doesn't
//! (`search`).
//!
//! # Invariants
//!
//! - Every `doc_id` that appears in any posting is present in both
//!   `documents` and `doc_lengths`.
//! - `upsert(d); upsert(d)` leaves the engine in the same observable state as
//!   a single `upsert(d)`.
//! - No internal synchronization: callers serialize their own
//!   `upsert_documents`/`remove_document`/`search` calls across threads.

use crate::inverted::{InvertedIndex, TermOccurrences};
use crate::scoring::{rank, RankContext, RankOptions};
use crate::tokenizer::{tokenize, TokenizeOptions};
use crate::topk::top_k;
use crate::trie::{InsertOptions, Trie};
use crate::types::{DocId, DocumentInput, IndexStats, SearchHit, SearchPage};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

const MIN_ID_LEN: usize = 1;
const MAX_ID_LEN: usize = 256;
const MIN_TEXT_LEN: usize = 1;
const MAX_TEXT_LEN: usize = 200_000;

/// Boundary validation applied to documents entering through the CLI's bulk
/// loader. The engine itself never calls this — `upsert_documents` accepts
/// whatever it's given; only the ambient ingestion path enforces it.
pub fn validate_document(doc: &DocumentInput) -> Result<(), String> {
    if !(MIN_ID_LEN..=MAX_ID_LEN).contains(&doc.id.len()) {
        return Err(format!(
            "id length must be between {MIN_ID_LEN} and {MAX_ID_LEN} bytes, got {}",
            doc.id.len()
        ));
    }
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&doc.text.len()) {
        return Err(format!(
            "text length must be between {MIN_TEXT_LEN} and {MAX_TEXT_LEN} bytes, got {}",
            doc.text.len()
        ));
    }
    Ok(())
}

/// Query-time options. Mirrors the `mode`/`page.cursor` shape the (out of
/// scope) HTTP collaborator documents: `enable_prefix = true` is `mode:
/// "prefix"`, `enable_prefix = false` is `mode: "fulltext"`.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub limit: usize,
    pub cursor: Option<String>,
    pub enable_prefix: bool,
    pub prefix_limit: usize,
    pub candidate_limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            cursor: None,
            enable_prefix: true,
            prefix_limit: 5,
            candidate_limit: None,
        }
    }
}

/// Owns the document registry, per-document lengths, the inverted index, and
/// the prefix trie. The ranker and top-K selector are stateless and borrowed
/// in for the duration of a single `search` call.
#[derive(Default)]
pub struct SearchEngine {
    documents: HashMap<DocId, DocumentInput>,
    doc_lengths: HashMap<DocId, usize>,
    index: InvertedIndex,
    trie: Trie,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `docs` in order. A later document sharing an id with an
    /// earlier one in the same call wins, since each upsert replaces the
    /// previous entry for that id outright.
    #[instrument(skip(self, docs), fields(count = docs.len()))]
    pub fn upsert_documents(&mut self, docs: &[DocumentInput]) {
        for doc in docs {
            self.upsert_one(doc);
        }
        info!(doc_count = self.documents.len(), "upserted documents");
    }

    fn upsert_one(&mut self, doc: &DocumentInput) {
        self.remove_document(&doc.id);

        let options = TokenizeOptions {
            normalize_case: true,
            remove_stop_words: false,
        };

        let mut occurrences: HashMap<String, TermOccurrences> = HashMap::new();
        let mut length = 0usize;
        for token in tokenize(&doc.text, options) {
            let entry = occurrences.entry(token.term.clone()).or_default();
            entry.tf += 1;
            entry.positions.push(token.position);
            self.trie.insert(&token.term, InsertOptions { track_frequency: true });
            length += 1;
        }

        self.index.add_document(&doc.id, &occurrences);
        self.doc_lengths.insert(doc.id.clone(), length);
        self.documents.insert(doc.id.clone(), doc.clone());
    }

    /// Removes `id` from the registry, doc lengths, and index. The trie is
    /// not pruned: a later `complete()` may surface a term with no live
    /// postings, but the ranker drops zero-`df` terms, so it can never
    /// produce a hit for one.
    #[instrument(skip(self))]
    pub fn remove_document(&mut self, id: &str) {
        if self.documents.remove(id).is_some() {
            self.doc_lengths.remove(id);
            self.index.remove_document(id);
            debug!(doc_id = id, "removed document");
        }
    }

    pub fn stats(&self) -> IndexStats {
        self.index.get_stats()
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    pub fn get_document(&self, id: &str) -> Option<&DocumentInput> {
        self.documents.get(id)
    }

    /// Runs the full query pipeline: tokenize, optionally fold in prefix
    /// completions, rank, apply the cursor, slice the page, and defensively
    /// re-sort through the top-K selector.
    #[instrument(skip(self, options), fields(query = raw_query))]
    pub fn search(&self, raw_query: &str, options: &SearchOptions) -> SearchPage {
        let query_options = TokenizeOptions {
            normalize_case: true,
            remove_stop_words: true,
        };
        let mut query_terms: Vec<String> =
            tokenize(raw_query, query_options).map(|t| t.term).collect();

        if options.enable_prefix && !raw_query.trim().is_empty() {
            if let Some(fragment) = raw_query.split_whitespace().next_back() {
                if fragment.len() >= 2 {
                    let lowered = fragment.to_ascii_lowercase();
                    for completion in self.trie.complete(&lowered, options.prefix_limit) {
                        query_terms.push(completion.term);
                    }
                }
            }
        }

        let ctx = RankContext {
            index: &self.index,
            stats: self.stats(),
            doc_lengths: Some(&self.doc_lengths),
        };
        let rank_options = RankOptions {
            idf_smoothing: 1.0,
            candidate_limit: options.candidate_limit,
        };
        let all_hits = rank(&query_terms, &ctx, &rank_options);

        let start = options
            .cursor
            .as_deref()
            .and_then(|cursor| all_hits.iter().position(|hit| hit.doc_id == cursor))
            .map(|index| index + 1)
            .unwrap_or(0);

        let end = (start + options.limit).min(all_hits.len());
        let page_hits: Vec<SearchHit> = if start < all_hits.len() {
            all_hits[start..end].to_vec()
        } else {
            Vec::new()
        };

        let next_cursor = if start + options.limit < all_hits.len() && !page_hits.is_empty() {
            page_hits.last().map(|hit| hit.doc_id.clone())
        } else {
            None
        };

        let hits = top_k(page_hits, options.limit, compare_hits);

        SearchPage { hits, next_cursor }
    }
}

fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}
