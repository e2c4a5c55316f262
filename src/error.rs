//! Crate-wide error type.
//!
//! The search engine core itself never fails (an invalid cursor resets to the
//! first page, an unknown query term contributes nothing, an empty query
//! returns no hits) — this enum exists for the edges around it: loading
//! documents from disk and validating them before they reach the engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
