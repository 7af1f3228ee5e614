//! Command-line arguments and how they layer over the config file.

use clap::Parser;
use slp_report::LineEnding;
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "swagger-log-parser",
    version,
    about = "Render the LogicLog of a settings-resolution JSON log as a text report"
)]
pub struct Cli {
    /// JSON log file to read (defaults to the configured or built-in path)
    pub input: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not open the report in a text viewer
    #[arg(long)]
    pub no_open: bool,

    /// Viewer command to use instead of the platform default
    #[arg(long)]
    pub viewer: Option<String>,

    /// Separator line ending: native, lf or crlf
    #[arg(long, value_parser = parse_line_ending)]
    pub line_ending: Option<LineEnding>,
}

fn parse_line_ending(s: &str) -> Result<LineEnding, String> {
    s.parse()
}

impl Cli {
    /// Build the effective config: flags over config file over defaults.
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        config.report = config.report.with_input_path(self.input.clone());
        if let Some(output) = &self.output {
            config.report = config.report.with_output_path(output);
        }
        if let Some(line_ending) = self.line_ending {
            config.report = config.report.with_line_ending(line_ending);
        }
        if self.no_open {
            config.open_viewer = false;
        }
        if let Some(viewer) = &self.viewer {
            config.viewer_command = Some(viewer.clone());
        }
        Ok(config)
    }
}
