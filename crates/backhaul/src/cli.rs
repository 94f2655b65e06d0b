//! CLI argument parsing with clap

use clap::Parser;
use std::path::PathBuf;

/// Backhaul - concurrent remote-mirror backup daemon
#[derive(Parser, Debug)]
#[command(name = "backhaul")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON job list
    #[arg(default_value = "jobs.json")]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}
