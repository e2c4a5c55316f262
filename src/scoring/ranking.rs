//! The TF-IDF union ranker.
//!
//! # Invariants
//!
//! - `idf(df) = ln((N + s) / (df + s)) + 1` is reproduced exactly; this
//!   formula is fixed, not a tunable approximation.
//! - Output is sorted by `(score descending, doc_id ascending)`; equal scores
//!   always tie-break lexicographically by `doc_id`, never by insertion
//!   order.
//! - Identical `(index state, queryTerms)` always produce identical output.

use crate::inverted::InvertedIndex;
use crate::types::{IndexStats, SearchHit};
use std::collections::HashMap;

/// Everything the ranker needs to see of the engine's state for one call. It
/// borrows the index and doc lengths rather than owning them — no ranker
/// instance outlives the call that constructs this context.
pub struct RankContext<'a> {
    pub index: &'a InvertedIndex,
    pub stats: IndexStats,
    pub doc_lengths: Option<&'a HashMap<String, usize>>,
}

/// Tunables for a single `rank` call.
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    pub idf_smoothing: f64,
    /// When set, candidates are pruned to the top `candidate_limit` by
    /// *un-normalized* union score before length normalization runs. The
    /// surviving set is then normalized and re-sorted, so a document that
    /// would only rank highly after normalization can still be pruned away
    /// here — this is the contract as specified, not an oversight.
    pub candidate_limit: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            idf_smoothing: 1.0,
            candidate_limit: None,
        }
    }
}

fn idf(doc_count: usize, df: usize, smoothing: f64) -> f64 {
    let n = doc_count as f64;
    let df = df as f64;
    ((n + smoothing) / (df + smoothing)).ln() + 1.0
}

/// Scores and orders candidate documents for `query_terms` against `ctx`.
///
/// Duplicate terms in `query_terms` are meaningful: a term repeated twice
/// contributes its `tf x idf` sum twice. Terms absent from the index, or
/// present with `df = 0`, contribute nothing and are not an error.
pub fn rank(query_terms: &[String], ctx: &RankContext, options: &RankOptions) -> Vec<SearchHit> {
    if query_terms.is_empty() || ctx.stats.doc_count == 0 {
        return Vec::new();
    }

    let mut retained: Vec<_> = query_terms
        .iter()
        .filter_map(|term| {
            let postings = ctx.index.get_postings(term)?;
            if postings.df == 0 {
                None
            } else {
                Some(postings)
            }
        })
        .collect();

    // Ascending df so partial-sum checkpoints are deterministic regardless of
    // query term order.
    retained.sort_by_key(|list| list.df);

    let mut scores: HashMap<String, f64> = HashMap::new();
    for list in &retained {
        let weight = idf(ctx.stats.doc_count, list.df, options.idf_smoothing);
        for posting in &list.postings {
            *scores.entry(posting.doc_id.clone()).or_insert(0.0) += posting.tf as f64 * weight;
        }
    }

    let mut candidates: Vec<(String, f64)> = scores.into_iter().collect();

    if let Some(limit) = options.candidate_limit {
        if candidates.len() > limit {
            candidates.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            candidates.truncate(limit);
        }
    }

    let mut hits: Vec<SearchHit> = candidates
        .into_iter()
        .map(|(doc_id, raw_score)| {
            let score = match ctx.doc_lengths.and_then(|lengths| lengths.get(&doc_id)) {
                Some(&length) if length > 0 => raw_score / (length as f64).sqrt(),
                _ => raw_score,
            };
            SearchHit { doc_id, score }
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });

    hits
}
