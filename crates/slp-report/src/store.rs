//! Report storage abstraction: read the input document, write the report.

use std::path::Path;

use crate::error::{ReportError, ReportResult};

/// Where input documents come from and where reports go.
///
/// Lets `run` be exercised against `MockReportStore` without touching the
/// filesystem.
pub trait ReportStore {
    /// Read the whole document at `path` as text.
    fn read_text(&self, path: &Path) -> ReportResult<String>;

    /// Write `contents` to `path`, replacing anything already there.
    fn write_text(&self, path: &Path, contents: &str) -> ReportResult<()>;
}

/// Reads and writes on the local filesystem.
pub struct FileReportStore;

impl ReportStore for FileReportStore {
    fn read_text(&self, path: &Path) -> ReportResult<String> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReportError::NotFound(path.display().to_string())
            } else {
                ReportError::Io(format!("{}: {e}", path.display()))
            }
        })?;
        // Windows tooling tends to save logs with a BOM.
        Ok(match content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        })
    }

    fn write_text(&self, path: &Path, contents: &str) -> ReportResult<()> {
        std::fs::write(path, contents)
            .map_err(|e| ReportError::Io(format!("{}: {e}", path.display())))
    }
}
