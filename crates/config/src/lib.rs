#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Run configuration for fidx
//!
//! A verification run is configured only by its command-line flags: the
//! root directory and the index location. This crate turns those raw
//! values into absolute paths, falling back to the defaults in
//! [`constants`].

pub mod constants;

pub use constants::{DEFAULT_INDEX_FILE, DEFAULT_ROOT};

use fidx_errors::Error;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolved paths for one verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyConfig {
    /// Absolute root directory; index entries are resolved against it
    pub root: PathBuf,
    /// Absolute path of the index file
    pub index_path: PathBuf,
}

impl VerifyConfig {
    /// Resolve the root and index paths.
    ///
    /// The root is canonicalized when it exists and made absolute against
    /// the current directory otherwise. The index is joined onto the root,
    /// so an absolute index path is used as given.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub async fn resolve(root: &Path, index: &Path) -> Result<Self, Error> {
        let root = match fs::canonicalize(root).await {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "root not canonicalized");
                absolute(root)?
            }
        };
        let index_path = root.join(index);

        tracing::debug!(
            root = %root.display(),
            index = %index_path.display(),
            "resolved verification paths"
        );

        Ok(Self { root, index_path })
    }

    /// File name of the index, as shown in the confirmation message
    #[must_use]
    pub fn index_display_name(&self) -> String {
        self.index_path.file_name().map_or_else(
            || self.index_path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        let root = PathBuf::from(DEFAULT_ROOT);
        let index_path = root.join(DEFAULT_INDEX_FILE);
        Self { root, index_path }
    }
}

fn absolute(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| Error::io_with_path(&e, path))?;
    Ok(cwd.join(path))
}
