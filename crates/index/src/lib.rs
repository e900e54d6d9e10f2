#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! File index handling for fidx
//!
//! This crate reads `FILE_INDEX_SHA256.txt`, the declared list of files and
//! their SHA-256 digests. The whole index is parsed before any listed file
//! is touched, so a malformed index never leads to partial verification.

mod models;
mod parser;

pub use models::IndexEntry;
pub use parser::parse_index;

use fidx_errors::IndexError;
use std::path::Path;

/// Read and parse an index file.
///
/// # Errors
/// Returns [`IndexError::Unreadable`] if the file cannot be read as UTF-8
/// text, or [`IndexError::Parse`] for a malformed line.
pub async fn load_index(path: &Path) -> Result<Vec<IndexEntry>, IndexError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| IndexError::from_io_with_path(&e, path))?;

    tracing::debug!(index = %path.display(), bytes = text.len(), "read file index");
    parse_index(&text)
}
