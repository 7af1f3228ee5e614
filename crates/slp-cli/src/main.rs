//! swagger-log-parser: renders the `LogicLog` of a settings-resolution JSON
//! log as a plain-text report and opens it in a text viewer.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slp_cli::app;
use slp_cli::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    tracing::debug!(?config, "config resolved");

    let viewer = app::viewer_for(&config);
    app::execute(&config, viewer.as_ref())?;
    Ok(())
}
