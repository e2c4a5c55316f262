//! TF-IDF ranking.
//!
//! This module exists because the inverted index only answers "which
//! documents contain this term" — turning that into an ordered list of hits
//! for a multi-term query is a separate concern with its own fixed formula
//! and its own ordering guarantees.

mod ranking;

pub use ranking::{rank, RankContext, RankOptions};
