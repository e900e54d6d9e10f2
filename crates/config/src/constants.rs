//! Fixed defaults for a verification run
//!
//! There is no configuration file. These values apply whenever the
//! corresponding command-line flag is omitted.

/// Index file name, resolved relative to the root
pub const DEFAULT_INDEX_FILE: &str = "FILE_INDEX_SHA256.txt";

/// Root directory used for resolving index entries
pub const DEFAULT_ROOT: &str = ".";
