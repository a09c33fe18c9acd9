use clap::Parser;

use logview::cli::Cli;
use logview::{Outcome, RunOptions};
use logview_core::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let opts = RunOptions::resolve(&cli, &config)?;

    match logview::run::run(&opts)? {
        Outcome::Written(path) => println!("HTML file created: {}", path.display()),
        Outcome::NoMatches => println!("No log entries found matching the specified criteria."),
    }
    Ok(())
}
