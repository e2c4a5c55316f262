//! Test fixtures shared across unit and integration tests.
//!
//! Always compiled, hidden from docs. Canonical helpers so individual test
//! modules don't each reinvent document construction.

#![doc(hidden)]

use crate::types::DocumentInput;

/// A document with the given id and body text, no metadata.
pub fn make_doc(id: &str, text: &str) -> DocumentInput {
    DocumentInput {
        id: id.to_string(),
        text: text.to_string(),
        metadata: None,
    }
}

/// A document with a single string metadata field attached.
pub fn make_doc_with_metadata(id: &str, text: &str, key: &str, value: &str) -> DocumentInput {
    let mut metadata = std::collections::HashMap::new();
    metadata.insert(
        key.to_string(),
        serde_json::Value::String(value.to_string()),
    );
    DocumentInput {
        id: id.to_string(),
        text: text.to_string(),
        metadata: Some(metadata),
    }
}
