//! CLI argument parsing module for depgraph

use clap::Parser;
use std::path::PathBuf;

/// Transitive dependency graph analyzer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depgraph",
    version,
    about = "Transitive dependency graph analyzer"
)]
pub struct CliArgs {
    /// Analysis configuration file (default: config.yaml)
    #[arg(default_value = "config.yaml")]
    pub config: PathBuf,

    /// Override the configured maximum traversal depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}
