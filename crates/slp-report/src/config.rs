//! Report run configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::LineEnding;

/// Input used when nothing else names one.
#[cfg(windows)]
pub const DEFAULT_INPUT_PATH: &str = "C:/a.json";
#[cfg(not(windows))]
pub const DEFAULT_INPUT_PATH: &str = "a.json";

/// Report file written when no output path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "Result.txt";

/// Paths and formatting for one report run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON log to read. `None` falls back to [`DEFAULT_INPUT_PATH`].
    pub input_path: Option<PathBuf>,
    /// Report file to (over)write.
    pub output_path: PathBuf,
    /// Line ending used in the blank-line separator.
    pub line_ending: LineEnding,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            line_ending: LineEnding::Native,
        }
    }
}

impl ReportConfig {
    /// Override the input path when one is supplied.
    pub fn with_input_path(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        if let Some(path) = path {
            self.input_path = Some(path.into());
        }
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// The input path that will actually be read.
    pub fn input_path(&self) -> &Path {
        self.input_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_INPUT_PATH))
    }
}
