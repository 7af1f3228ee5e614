//! Report generation error types.

use thiserror::Error;

/// Fatal errors raised while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ReportError {
    /// True for the I/O family (missing input included).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Io(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;

/// Failure to hand the finished report to a text viewer. Never fatal.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid viewer command: {0}")]
    InvalidCommand(String),

    #[error("failed to launch {program}: {message}")]
    Launch { program: String, message: String },

    #[error("no text viewer available on this platform")]
    Unavailable,
}
