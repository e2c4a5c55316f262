//! `lexica`: an in-memory full-text search engine core.
//!
//! Given a stream of documents (an opaque id, raw text, and optional
//! metadata), this crate builds an inverted index and a prefix dictionary,
//! then answers ranked queries in two modes — full-text and prefix/typeahead
//! — returning a stably ordered, cursor-paginated list of scored hits.
//!
//! Six pieces cooperate:
//!
//! - [`tokenizer`] turns text into a lazy sequence of positioned tokens.
//! - [`inverted`] maps terms to postings (document frequency, term
//!   frequency, positions).
//! - [`trie`] is a prefix dictionary over the term vocabulary with weighted
//!   autocomplete.
//! - [`scoring`] ranks candidate documents by TF-IDF union scoring with
//!   optional length normalization and candidate pruning.
//! - [`topk`] is a bounded min-heap selector that enforces the final
//!   ordering contract regardless of what produced the candidate list.
//! - [`engine`] glues the four together, owns the document registry, and
//!   implements cursor pagination.
//!
//! What this crate deliberately does not do: distributed indexing,
//! durability, BM25 scoring, phrase/proximity queries, field-weighted
//! scoring, relevance highlighting, fuzzy matching, or concurrent mutation
//! of a single engine instance — it is a single-writer, in-memory core
//! meant to sit behind a request handler that owns those concerns.

pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod inverted;
pub mod scoring;
pub mod testing;
pub mod tokenizer;
pub mod topk;
pub mod trie;
pub mod types;

pub use engine::{SearchEngine, SearchOptions};
pub use error::{Error, Result};
pub use types::{
    DocId, DocumentInput, IndexStats, Posting, PostingsList, SearchHit, SearchPage, Term, Token,
};
