//! Thread-Trawl main entry point
//!
//! This is the command-line interface for the Thread-Trawl link harvester.

use anyhow::Context;
use clap::Parser;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use thread_trawl::config::load_or_default;
use thread_trawl::output::{to_json, write_snapshot};
use thread_trawl::Orchestrator;
use tracing_subscriber::EnvFilter;

/// Thread-Trawl: harvests the links discussed in a forum's top stories
///
/// Walks the comment tree of every top story, fetches each outbound link,
/// classifies it, and writes a deduplicated JSON snapshot.
#[derive(Parser, Debug)]
#[command(name = "thread-trawl")]
#[command(version = "1.0.0")]
#[command(about = "Harvests and classifies links from forum discussions", long_about = None)]
struct Cli {
    /// Write the snapshot to this file instead of the log
    #[arg(long, value_name = "PATH")]
    filename: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// How long exit waits for blocking work still running after the batch is done
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    run_to_completion(trawl(cli), SHUTDOWN_GRACE)?
}

/// Runs a future on a fresh multi-threaded runtime, then shuts the runtime down
///
/// Metadata extractions abandoned after their timeout keep their blocking threads. Shutdown
/// waits at most `grace` for them instead of joining them.
fn run_to_completion<F: Future>(future: F, grace: Duration) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    let output = runtime.block_on(future);
    runtime.shutdown_timeout(grace);

    Ok(output)
}

async fn trawl(cli: Cli) -> anyhow::Result<()> {
    let config = match load_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }

    let orchestrator = Orchestrator::from_config(config)?;
    let snapshot = match orchestrator.run().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            return Err(e.into());
        }
    };

    match &cli.filename {
        Some(path) => {
            write_snapshot(&snapshot, path)
                .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
            tracing::info!(
                "Wrote {} links to {}",
                snapshot.links.len(),
                path.display()
            );
        }
        None => tracing::info!("{}", to_json(&snapshot)?),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("thread_trawl=info,warn"),
            1 => EnvFilter::new("thread_trawl=debug,info"),
            2 => EnvFilter::new("thread_trawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
