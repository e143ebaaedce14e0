use anyhow::Context;
use clap::Parser;
use cq_config::QueryConfig;
use cq_manifest::{WorkspaceLayout, WorkspaceReport};

mod cli;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("cargo-query error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = QueryConfig::load_with_override(cli.workspace.as_deref())
        .context("failed to load configuration")?;
    let layout = WorkspaceLayout::new(config.path_ws);

    // Fully built before anything is printed, so a failure leaves stdout empty.
    let report = WorkspaceReport::collect(&layout)
        .with_context(|| format!("failed to query workspace at {}", layout.root().display()))?;

    output::output(&report, cli.format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CARGO_QUERY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
