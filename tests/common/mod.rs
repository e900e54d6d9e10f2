//! Common test utilities for driving the external test harness
//!
//! The harness is a separate program. Its contract here is structural only:
//! it exits zero and leaves a non-empty JSON array at the `--out` path.

pub mod harness;

pub use harness::{HarnessError, HarnessRun};
