//! The building blocks of the search index.
//!
//! These types define how documents, terms, and postings fit together. Every
//! struct here has a corresponding invariant in `contracts.rs`, so if
//! something seems overly constrained, there's a debug assertion depending on
//! it.
//!
//! # Invariants
//!
//! - **Posting**: `tf >= 1`; if `positions` is present it is strictly
//!   increasing and has length `tf`.
//! - **PostingsList**: `df == postings.len()`; `postings` is sorted ascending
//!   by `doc_id`.
//! - Every `doc_id` that appears in any posting is present in the engine's
//!   document registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque document identifier, compared byte-for-byte (lexicographically, via
/// `String`'s `Ord`) for tie-breaking.
pub type DocId = String;

/// A normalized index term: lowercase ASCII alphanumeric, byte-exact equality.
pub type Term = String;

/// A single token produced by the tokenizer.
///
/// `position` is the 0-based index of this token within the *raw* token
/// stream of its source text - it increments whether or not the token
/// survives stop-word filtering. `start_offset`/`end_offset` are character
/// offsets into the original text and are advisory only; no operator in this
/// crate consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub term: Term,
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// One document's occurrence record for a single term.
///
/// `tf` is always `>= 1`. When `positions` is present it is strictly
/// increasing and has exactly `tf` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub tf: u32,
    pub positions: Option<Vec<usize>>,
}

/// A term's full set of postings, sorted ascending by `doc_id`.
///
/// `df` always equals `postings.len()`; a term with no live postings is not
/// represented by a `PostingsList` at all (see `InvertedIndex::get_postings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingsList {
    pub term: Term,
    pub df: usize,
    pub postings: Vec<Posting>,
}

/// Index-wide statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub doc_count: usize,
}

/// Arbitrary caller-supplied metadata attached to a document, passed through
/// to search results untouched.
pub type Metadata = HashMap<String, serde_json::Value>;

/// A document as submitted to `SearchEngine::upsert_documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// A single scored, ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
}

/// A page of search results plus the cursor for the next page, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<SearchHit>,
    pub next_cursor: Option<String>,
}
