//! Backhaul - concurrent remote-mirror backup daemon
//!
//! This is the main entry point for the backhaul command-line daemon.

use anyhow::{Context, Result};
use backhaul::cli::Cli;
use backhaul::supervisor;
use backhaul_core::load_jobs;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Configuration errors are the only ones that affect exit status;
    // everything past this point is contained per cycle and logged.
    let jobs = load_jobs(&cli.config)
        .with_context(|| format!("Failed to load job list from {}", cli.config.display()))?;

    if jobs.is_empty() {
        anyhow::bail!("No jobs configured in {}", cli.config.display());
    }

    info!("starting {} job(s)", jobs.len());
    supervisor::run_jobs(jobs).await
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
