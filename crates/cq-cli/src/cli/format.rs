use clap::ValueEnum;

/// How the report is written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line, lints comma-joined (what Meson reads).
    #[default]
    Lines,
    /// Pretty-printed JSON object.
    Json,
}
