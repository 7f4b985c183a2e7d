//! depgraph - Transitive dependency graph analyzer CLI tool
//!
//! Resolves the transitive dependency graph of a package from a live
//! registry or a local registry snapshot, prints it, and writes it as
//! JSON to the configured output file.

use clap::Parser;
use depgraph::analyzer::DependencyAnalyzer;
use depgraph::cli::CliArgs;
use depgraph::config::Config;
use depgraph::output::{create_formatter, write_graph, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors uniformly
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(&args.config)?;

    // CLI override takes priority over the config file
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    if args.verbose {
        eprintln!("depgraph v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("package_name: {}", config.package_name);
        eprintln!("repository_url: {}", config.repository_url);
        eprintln!("mode: {}", config.mode);
        eprintln!("version: {}", config.version);
        eprintln!("output_file: {}", config.output_file.display());
        eprintln!("max_depth: {}", config.max_depth);
    }

    let analyzer = DependencyAnalyzer::from_config(config.clone())?;
    let result = analyzer.run_analysis(!args.quiet).await?;

    // Output results
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    write_graph(&config.output_file, &result.graph)?;

    if args.verbose {
        eprintln!();
        eprintln!("Graph written to {}", config.output_file.display());
    }

    Ok(ExitCode::SUCCESS)
}
