//! CLI entry point for bulkfetch.

use std::time::Duration;

use anyhow::{Context, Result};
use bulkfetch::directory::{prepare_output_dir, resolve_output_dir};
use bulkfetch::{CollisionPolicy, DownloaderBuilder, Source, Status, StyleOptions};
use clap::Parser;
use tracing::{debug, info, warn};

mod cli;
mod logging;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    logging::init_logging(args.default_log_level());

    debug!(?args, "CLI arguments parsed");

    let output = resolve_output_dir(&args.output)?;
    info!("Current directory: {}", std::env::current_dir()?.display());
    prepare_output_dir(&output).await;

    let source = if args.stdin {
        Source::Stdin
    } else {
        Source::from_arg(&args.input)
    };
    let urls = source.read().await?;

    let mut builder = DownloaderBuilder::new().directory(output);
    if !args.progress {
        builder = builder.style_options(StyleOptions::hidden());
    }
    if let Some(concurrency) = args.concurrency {
        builder = builder.concurrent_downloads(usize::from(concurrency));
    }
    if let Some(user_agent) = args.user_agent {
        builder = builder.user_agent(user_agent);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    if args.allow_collisions {
        builder = builder.collisions(CollisionPolicy::Allow);
    }
    let downloader = builder.build();

    let report = downloader
        .download_urls(&urls)
        .await
        .context("Cannot start downloads")?;

    for failure in report.failures() {
        if let Status::Fail(reason) = failure.status() {
            warn!(url = %failure.download().url, "{}", reason);
        }
    }

    println!("Total files downloaded: {}", report.downloaded());

    Ok(())
}
