use clap::Parser;
use std::path::PathBuf;

/// Command-line surface. Every option left unset falls back to the config
/// file's `[run]` section.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "logview",
    version,
    about = "Render an NDJSON log file as a filterable, self-contained HTML page"
)]
pub struct Cli {
    /// NDJSON file to read. Defaults to the most recently modified
    /// `*.ndjson` file in the current directory.
    pub file: Option<PathBuf>,

    /// Minimum log level to collect (e.g. trace, debug, info, warning, error).
    #[arg(short, long)]
    pub level: Option<String>,

    /// Field mapping to read the file with (`rich`, `simple`, or a schema
    /// declared in the config file).
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Level the page's level selector opens on.
    #[arg(long)]
    pub ui_level: Option<String>,

    /// Directory the report is written to (default: system temp directory).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the report without opening it.
    #[arg(long)]
    pub no_open: bool,

    /// Read configuration from this file instead of
    /// `~/.config/logview/config.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log pipeline decisions at debug level.
    #[arg(long)]
    pub debug: bool,
}
