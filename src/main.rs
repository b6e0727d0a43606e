//! CLI entry point for the fetcher tool.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fetcher_core::{FetchConfig, fetch_and_report};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = FetchConfig::default();
    info!(url = %config.url, timeout_secs = config.timeout.as_secs(), "fetching page");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    fetch_and_report(&config, &mut out)
        .await
        .with_context(|| format!("failed to fetch {}", config.url))?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
