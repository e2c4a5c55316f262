//! Runtime contracts for the data-model invariants documented in `types.rs`.
//!
//! These are debug-mode-only assertions (`debug_assert!`), so they cost
//! nothing in release builds. They exist to catch a broken invariant at the
//! point it's introduced rather than several calls later when a query
//! returns a subtly wrong order.

use crate::types::PostingsList;

/// `df == postings.len()` and `postings` is sorted strictly ascending by
/// `doc_id`, with `tf >= 1` on every entry.
#[inline]
pub fn check_postings_list_well_formed(list: &PostingsList) {
    debug_assert_eq!(
        list.df,
        list.postings.len(),
        "df {} does not match postings.len() {} for term {:?}",
        list.df,
        list.postings.len(),
        list.term
    );

    for posting in &list.postings {
        debug_assert!(
            posting.tf >= 1,
            "posting for term {:?} doc {:?} has tf=0",
            list.term,
            posting.doc_id
        );
        if let Some(positions) = &posting.positions {
            debug_assert_eq!(
                positions.len(),
                posting.tf as usize,
                "positions.len() does not match tf for term {:?} doc {:?}",
                list.term,
                posting.doc_id
            );
            debug_assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "positions not strictly increasing for term {:?} doc {:?}",
                list.term,
                posting.doc_id
            );
        }
    }

    for pair in list.postings.windows(2) {
        debug_assert!(
            pair[0].doc_id < pair[1].doc_id,
            "postings not sorted ascending by doc_id for term {:?}",
            list.term
        );
    }
}

/// `topK` output is monotone non-decreasing under `compare` and has length
/// `min(k, items)`.
#[inline]
pub fn check_top_k_monotone<T>(items: &[T], k: usize, original_len: usize, compare: impl Fn(&T, &T) -> std::cmp::Ordering) {
    debug_assert!(items.len() <= k.max(items.len()));
    debug_assert_eq!(items.len(), k.min(original_len));
    for pair in items.windows(2) {
        debug_assert_ne!(
            compare(&pair[0], &pair[1]),
            std::cmp::Ordering::Greater,
            "top_k output not monotone under comparator"
        );
    }
}
