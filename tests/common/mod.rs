//! Shared fixtures for the integration/property/search test suites.

use lexica::DocumentInput;

pub fn doc(id: &str, text: &str) -> DocumentInput {
    DocumentInput {
        id: id.to_string(),
        text: text.to_string(),
        metadata: None,
    }
}
