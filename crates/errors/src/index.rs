//! Index (manifest) error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndexError {
    /// A non-blank, non-comment line did not split into a digest and a path
    #[error("Invalid index line {line}: '{content}'")]
    Parse { line: usize, content: String },

    #[error("cannot read index {path}: {message}")]
    Unreadable { path: String, message: String },
}

impl IndexError {
    /// Convert an `io::Error` raised while reading the index file
    #[must_use]
    pub fn from_io_with_path(err: &std::io::Error, path: &std::path::Path) -> Self {
        Self::Unreadable {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl UserFacingError for IndexError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Parse { .. } => {
                Some("Each index line must be '<hex-digest>  <relative/path>'.")
            }
            Self::Unreadable { .. } => {
                Some("Check --root and --index point at a readable UTF-8 index file.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::Parse { .. } => "index.parse_error",
            Self::Unreadable { .. } => "index.unreadable",
        };
        Some(code)
    }
}
