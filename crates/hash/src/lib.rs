#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! SHA-256 content digests for fidx
//!
//! This crate provides the digest used to check indexed files. The
//! algorithm is fixed for the whole tool; callers never pick one per call.

use fidx_errors::{Error, StorageError};
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Name of the digest algorithm, as it appears in `FILE_INDEX_SHA256.txt`
pub const ALGORITHM: &str = "sha256";

/// Size of chunks for streaming hash computation
pub const CHUNK_SIZE: usize = 1024 * 1024; // 1MB

/// A SHA-256 hash value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hash {
    bytes: [u8; 32],
}

impl Hash {
    /// Create a hash from raw bytes
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Convert to lowercase hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Compute hash of a byte slice
    #[must_use]
    pub fn from_data(data: &[u8]) -> Self {
        Self::from_bytes(Sha256::digest(data).into())
    }

    /// Compare against a declared hex digest, ignoring ASCII case.
    ///
    /// The declared digest is not validated; anything that is not the
    /// 64-character hex form of this hash simply does not match.
    #[must_use]
    pub fn matches_hex(&self, declared: &str) -> bool {
        self.to_hex().eq_ignore_ascii_case(declared)
    }

    /// Compute hash of a file, reading it in `CHUNK_SIZE` pieces
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if any read fails.
    /// Reading a directory fails with [`StorageError::NotAFile`] on platforms
    /// that report it.
    pub async fn hash_file(path: &Path) -> Result<Self, Error> {
        let mut file = File::open(path)
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, path))?;

        let mut hasher = Sha256::new();
        let mut buffer = vec![0; CHUNK_SIZE];
        let mut total_bytes = 0u64;

        loop {
            let n = file
                .read(&mut buffer)
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, path))?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
            total_bytes += n as u64;
        }

        let hash = Self::from_bytes(hasher.finalize().into());
        tracing::trace!(
            path = %path.display(),
            algorithm = ALGORITHM,
            bytes = total_bytes,
            digest = %hash,
            "hashed file"
        );
        Ok(hash)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}
