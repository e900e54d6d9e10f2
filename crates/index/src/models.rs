//! Index data model

use serde::Serialize;

/// One `<digest>  <path>` line of the file index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Declared digest exactly as written; compared case-insensitively and
    /// never validated for format or length
    pub expected_digest: String,
    /// Path relative to the root, with any leading `./` removed
    pub relative_path: String,
    /// 1-based line number in the index file
    #[serde(skip)]
    pub line: usize,
}

impl IndexEntry {
    /// Create an entry, normalizing a leading `./` off the path
    #[must_use]
    pub fn new(expected_digest: impl Into<String>, relative_path: &str, line: usize) -> Self {
        let relative_path = relative_path
            .strip_prefix("./")
            .unwrap_or(relative_path)
            .to_string();
        Self {
            expected_digest: expected_digest.into(),
            relative_path,
            line,
        }
    }
}
