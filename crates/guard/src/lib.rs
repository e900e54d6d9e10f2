#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! File index verification guard
//!
//! Reconciles the entries of a parsed file index with the files on disk,
//! collecting missing files and digest mismatches into a
//! [`VerificationResult`] whose [`VerificationOutcome`] carries the
//! process exit code.

mod types;
mod verifier;

pub use types::{HashMismatch, VerificationOutcome, VerificationResult};
pub use verifier::verify_entries;
