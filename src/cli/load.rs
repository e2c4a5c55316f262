//! Bulk document loading for the CLI.
//!
//! Mirrors the `POST /documents` partial-failure contract the HTTP
//! collaborator documents (`{ingested, failed, failures: [{index, id,
//! message}]}`) without reimplementing HTTP status codes: malformed
//! documents are reported and skipped, the rest are ingested.

use lexica::engine::validate_document;
use lexica::error::{Error, Result};
use lexica::types::DocumentInput;
use std::path::Path;

/// One document that failed boundary validation during a bulk load.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub index: usize,
    pub id: String,
    pub message: String,
}

/// Reads `path` as either a single JSON array of documents, or a directory
/// containing one JSON document per file, then validates each one.
/// Documents that fail validation are reported in the returned failures list
/// rather than aborting the whole load.
pub fn load_documents(path: &Path) -> Result<(Vec<DocumentInput>, Vec<LoadFailure>)> {
    let raw = if path.is_dir() {
        load_from_directory(path)?
    } else {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)?
    };

    let mut documents = Vec::with_capacity(raw.len());
    let mut failures = Vec::new();

    for (index, doc) in raw.into_iter().enumerate() {
        match validate_document(&doc) {
            Ok(()) => documents.push(doc),
            Err(message) => failures.push(LoadFailure {
                index,
                id: doc.id,
                message,
            }),
        }
    }

    Ok((documents, failures))
}

fn load_from_directory(dir: &Path) -> Result<Vec<DocumentInput>> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::result::Result<Vec<_>, std::io::Error>>()?;
    entries.sort_by_key(std::fs::DirEntry::path);

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let contents = std::fs::read_to_string(&path)?;
        let doc: DocumentInput = serde_json::from_str(&contents)
            .map_err(|e| Error::InvalidDocument(format!("{}: {e}", path.display())))?;
        documents.push(doc);
    }
    Ok(documents)
}
