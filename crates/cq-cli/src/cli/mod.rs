use std::path::PathBuf;

use clap::Parser;

pub mod format;

pub use format::OutputFormat;

/// Top-level CLI parser for the `cargo-query` binary.
///
/// Run without arguments it behaves exactly as the build expects: manifests
/// are found through `PATH_WS` (or the current directory) and four lines are
/// printed.
#[derive(Debug, Parser)]
#[command(
    name = "cargo-query",
    version,
    about = "Print workspace manifest metadata for the Meson build"
)]
pub struct Cli {
    /// Workspace root (overrides PATH_WS)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Output format: lines, json
    #[arg(short, long, default_value = "lines")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
