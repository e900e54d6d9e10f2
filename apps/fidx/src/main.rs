//! fidx - Verify files against a FILE_INDEX_SHA256.txt manifest
//!
//! Reads the index, hashes every listed file under the root and reports
//! missing files and digest mismatches. The exit code is the only
//! machine-readable signal unless `--json` is given.

mod cli;
mod display;
mod error;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use fidx_config::VerifyConfig;
use fidx_guard::verify_entries;
use fidx_index::load_index;
use std::process;
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.debug);

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            debug!("Verification aborted: {}", e);
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic; returns the exit code of a completed run
async fn run(cli: Cli) -> Result<i32, CliError> {
    info!("Starting fidx v{}", env!("CARGO_PKG_VERSION"));

    let config = VerifyConfig::resolve(&cli.root, &cli.index).await?;

    // The whole index is parsed before any listed file is opened
    let entries = load_index(&config.index_path).await?;

    let result = verify_entries(&config.root, &entries).await?;

    OutputRenderer::new(cli.json).render_result(&config, &result)?;

    let outcome = result.outcome();
    info!(outcome = ?outcome, "Verification completed");
    Ok(outcome.exit_code())
}

/// Initialize tracing/logging
///
/// Logs always go to stderr so stdout carries only the report.
fn init_tracing(json_mode: bool, debug_enabled: bool) {
    if debug_enabled {
        // Debug mode: structured JSON logs
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("debug,fidx=debug")
                }),
            )
            .init();
    } else if json_mode {
        // JSON mode: suppress log output so stderr stays clean for callers
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
}
