//! Type definitions for file index verification

use fidx_hash::Hash;
use serde::Serialize;

/// Listed file whose content digest differs from the declared one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashMismatch {
    /// Path as written in the index (after `./` normalization)
    pub relative_path: String,
    /// Digest declared in the index, verbatim
    pub expected_digest: String,
    /// Digest computed from the file on disk
    pub actual_digest: Hash,
}

/// Terminal state of a completed verification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Every listed file exists with the declared digest
    Ok,
    /// At least one listed file is missing (mismatches may also exist)
    Missing,
    /// No file is missing but at least one digest differs
    Mismatch,
}

impl VerificationOutcome {
    /// Process exit code for this outcome
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Missing => 2,
            Self::Mismatch => 3,
        }
    }
}

/// Result of verification check
///
/// `missing` and `mismatched` are disjoint and keep index order. Entries in
/// neither list were present and matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// Listed paths that do not exist under the root
    pub missing: Vec<String>,
    /// Listed files whose digest does not match
    pub mismatched: Vec<HashMismatch>,
    /// Number of entries that matched
    pub ok_count: usize,
    /// Number of index entries processed
    pub checked: usize,
}

impl VerificationResult {
    /// Missing files take precedence over mismatches
    #[must_use]
    pub fn outcome(&self) -> VerificationOutcome {
        if !self.missing.is_empty() {
            VerificationOutcome::Missing
        } else if !self.mismatched.is_empty() {
            VerificationOutcome::Mismatch
        } else {
            VerificationOutcome::Ok
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome() == VerificationOutcome::Ok
    }
}
