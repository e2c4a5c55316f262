//! Inverted index: term -> postings.
//!
//! # Invariants
//!
//! 1. **POSTING_LIST_SORTED**: each `PostingsList.postings` is sorted
//!    ascending by `doc_id`.
//! 2. **DOC_FREQ_CORRECT**: `df == postings.len()`.
//! 3. **NO_DEAD_TERMS**: `get_postings`/`has_term` never expose a term whose
//!    posting set is empty; such terms are dropped from the map outright
//!    rather than kept around with `df = 0`.
//! 4. **TF_POSITIVE**: every posting's `tf >= 1`.

use crate::types::{IndexStats, Posting, PostingsList};
use std::collections::{HashMap, HashSet};

/// Per-term occurrence data collected while walking one document's tokens,
/// before it's folded into the index.
#[derive(Debug, Clone, Default)]
pub struct TermOccurrences {
    pub tf: u32,
    pub positions: Vec<usize>,
}

/// Term -> postings, plus the set of documents currently indexed.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, HashMap<String, Posting>>,
    doc_ids: HashSet<String>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `doc_id` with a fresh set of per-term occurrences. If
    /// `doc_id` was already present, every one of its existing postings is
    /// replaced first, so document reindexing is atomic from the caller's
    /// point of view.
    pub fn add_document(&mut self, doc_id: &str, occurrences: &HashMap<String, TermOccurrences>) {
        self.remove_document(doc_id);

        for (term, occ) in occurrences {
            debug_assert!(occ.tf >= 1, "add_document called with tf=0 for {term:?}");
            let posting = Posting {
                doc_id: doc_id.to_string(),
                tf: occ.tf,
                positions: if occ.positions.is_empty() {
                    None
                } else {
                    Some(occ.positions.clone())
                },
            };
            self.terms
                .entry(term.clone())
                .or_default()
                .insert(doc_id.to_string(), posting);
        }

        self.doc_ids.insert(doc_id.to_string());
    }

    /// Removes every posting for `doc_id`. A term left with no postings is
    /// dropped from the map entirely, not kept with `df = 0`.
    pub fn remove_document(&mut self, doc_id: &str) {
        self.terms.retain(|_, postings| {
            postings.remove(doc_id);
            !postings.is_empty()
        });
        self.doc_ids.remove(doc_id);
    }

    /// Returns the term's postings sorted ascending by `doc_id`, or `None`
    /// if the term is unknown or has no live postings.
    pub fn get_postings(&self, term: &str) -> Option<PostingsList> {
        let postings = self.terms.get(term)?;
        if postings.is_empty() {
            return None;
        }
        let mut list: Vec<Posting> = postings.values().cloned().collect();
        list.sort_by(|a, b| a.doc_id.cmp(&b.doc_id));
        Some(PostingsList {
            term: term.to_string(),
            df: list.len(),
            postings: list,
        })
    }

    pub fn has_term(&self, term: &str) -> bool {
        self.terms.get(term).is_some_and(|p| !p.is_empty())
    }

    pub fn get_stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_ids.len(),
        }
    }

    pub fn doc_count(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
