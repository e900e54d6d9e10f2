//! Command line interface definition

use clap::Parser;
use fidx_config::{DEFAULT_INDEX_FILE, DEFAULT_ROOT};
use std::path::PathBuf;

/// fidx - Verify files against a FILE_INDEX_SHA256.txt manifest
#[derive(Parser, Debug)]
#[command(name = "fidx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Verify files against a FILE_INDEX_SHA256.txt manifest")]
#[command(
    long_about = "Checks only the files listed in the index. Exit codes: 0 OK, \
                  2 missing file(s), 3 hash mismatch(es), 4 index parse error."
)]
pub struct Cli {
    /// Root directory that index paths are relative to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Index file, relative to the root
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INDEX_FILE)]
    pub index: PathBuf,

    /// Print the verification result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable structured (JSON) debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}
