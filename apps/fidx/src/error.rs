//! CLI error handling

use std::fmt;

use fidx_errors::{IndexError, UserFacingError};

/// Exit code for an index that cannot be read or parsed
pub const EXIT_PARSE_ERROR: i32 = 4;

/// Exit code for faults outside the integrity contract (I/O, rendering)
pub const EXIT_FAILURE: i32 = 1;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Index unreadable or malformed
    Index(IndexError),
    /// Verification aborted by an environment fault
    Verify(fidx_errors::Error),
    /// I/O error while writing output
    Io(std::io::Error),
}

impl CliError {
    /// Process exit code for this failure
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Index(_) => EXIT_PARSE_ERROR,
            CliError::Verify(_) | CliError::Io(_) => EXIT_FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Index(e) => write!(f, "PARSE_ERROR: {e}"),
            CliError::Verify(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                if e.is_retryable() {
                    write!(f, "\n  Retry: safe to retry this operation.")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Index(e) => Some(e),
            CliError::Verify(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<IndexError> for CliError {
    fn from(e: IndexError) -> Self {
        CliError::Index(e)
    }
}

impl From<fidx_errors::Error> for CliError {
    fn from(e: fidx_errors::Error) -> Self {
        match e {
            fidx_errors::Error::Index(index) => CliError::Index(index),
            other => CliError::Verify(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
