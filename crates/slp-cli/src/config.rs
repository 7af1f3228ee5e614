//! Tool configuration, loadable from an optional TOML file.

use serde::Deserialize;
use slp_report::ReportConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid config {path}: {message}")]
    Toml { path: String, message: String },
}

/// Top-level configuration for the tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input/output paths and separator line ending.
    #[serde(flatten)]
    pub report: ReportConfig,
    /// Open the finished report in a text viewer.
    pub open_viewer: bool,
    /// Viewer command overriding the platform default.
    pub viewer_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            open_viewer: true,
            viewer_command: None,
        }
    }
}

impl AppConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slp_report::LineEnding;
    use std::path::{Path, PathBuf};

    #[test]
    fn deserialize_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.open_viewer);
        assert!(config.viewer_command.is_none());
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
input_path = "/var/log/settings/a.json"
output_path = "/tmp/Result.txt"
line_ending = "crlf"
open_viewer = false
viewer_command = "less -R"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.report.input_path(),
            Path::new("/var/log/settings/a.json")
        );
        assert_eq!(config.report.output_path, PathBuf::from("/tmp/Result.txt"));
        assert_eq!(config.report.line_ending, LineEnding::CrLf);
        assert!(!config.open_viewer);
        assert_eq!(config.viewer_command.as_deref(), Some("less -R"));
    }

    #[test]
    fn invalid_line_ending_rejected() {
        assert!(toml::from_str::<AppConfig>(r#"line_ending = "cr""#).is_err());
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = AppConfig::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn from_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "open_viewer = maybe").unwrap();
        let err = AppConfig::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn from_file_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slp.toml");
        std::fs::write(&path, "output_path = \"report.txt\"\nopen_viewer = false\n").unwrap();
        let config = AppConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.report.output_path, PathBuf::from("report.txt"));
        assert!(!config.open_viewer);
    }
}
