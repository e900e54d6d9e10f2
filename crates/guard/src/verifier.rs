use crate::types::{HashMismatch, VerificationResult};
use fidx_errors::{Error, StorageError};
use fidx_hash::Hash;
use fidx_index::IndexEntry;
use std::io;
use std::path::Path;
use std::time::Instant;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryStatus {
    Ok,
    Missing,
    Mismatch,
}

/// Check every index entry against the tree under `root`.
///
/// Entries are handled one at a time in index order. A missing path is
/// recorded without hashing; an existing one is hashed and compared with
/// the declared digest, ignoring case. Every problem is collected so one
/// run reports them all.
///
/// # Errors
/// Returns an error if a path that exists cannot be read, for example a
/// directory or a file without read permission, or if its existence cannot
/// be checked at all.
pub async fn verify_entries(
    root: &Path,
    entries: &[IndexEntry],
) -> Result<VerificationResult, Error> {
    let start = Instant::now();
    let mut result = VerificationResult::default();

    for entry in entries {
        let status = check_entry(root, entry, &mut result).await?;
        tracing::debug!(
            path = %entry.relative_path,
            line = entry.line,
            status = ?status,
            "checked index entry"
        );
        if status == EntryStatus::Ok {
            result.ok_count += 1;
        }
        result.checked += 1;
    }

    tracing::info!(
        checked = result.checked,
        ok = result.ok_count,
        missing = result.missing.len(),
        mismatched = result.mismatched.len(),
        duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "file index verification finished"
    );

    Ok(result)
}

async fn check_entry(
    root: &Path,
    entry: &IndexEntry,
    result: &mut VerificationResult,
) -> Result<EntryStatus, Error> {
    let path = root.join(&entry.relative_path);

    if !path_exists(&path).await? {
        result.missing.push(entry.relative_path.clone());
        return Ok(EntryStatus::Missing);
    }

    let actual = Hash::hash_file(&path).await?;
    if actual.matches_hex(&entry.expected_digest) {
        return Ok(EntryStatus::Ok);
    }

    result.mismatched.push(HashMismatch {
        relative_path: entry.relative_path.clone(),
        expected_digest: entry.expected_digest.clone(),
        actual_digest: actual,
    });
    Ok(EntryStatus::Mismatch)
}

/// Follows symlinks, so a dangling link is absent.
async fn path_exists(path: &Path) -> Result<bool, Error> {
    match fs::try_exists(path).await {
        Ok(exists) => Ok(exists),
        Err(e) if is_absent(&e) => Ok(false),
        Err(e) => Err(StorageError::from_io_with_path(&e, path).into()),
    }
}

/// Errors that prove the path names nothing
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    ) || is_symlink_loop(err)
}

#[cfg(unix)]
fn is_symlink_loop(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ELOOP)
}

#[cfg(not(unix))]
fn is_symlink_loop(_err: &io::Error) -> bool {
    false
}
