//! In-memory store and recording viewer for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult, ViewerError};
use crate::store::ReportStore;
use crate::viewer::Viewer;

/// A store that serves pre-loaded documents and captures written reports.
pub struct MockReportStore {
    files: RefCell<HashMap<PathBuf, String>>,
    fail_writes: bool,
    writes: Cell<usize>,
}

impl MockReportStore {
    pub fn new() -> Self {
        Self {
            files: RefCell::new(HashMap::new()),
            fail_writes: false,
            writes: Cell::new(0),
        }
    }

    /// Add a document at the given path.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.get_mut().insert(path.into(), contents.into());
    }

    /// Make every `write_text` call fail with an I/O error.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current contents at `path`, if any.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Create a mock with a realistic settings-resolution log at `a.json`.
    pub fn with_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "a.json",
            r#"{
  "RequestId": "5f0c7a2e-8d1b-4c3e-9a6f-1b2c3d4e5f60",
  "UserData": "{\"Gcid\":1001,\"InstrumentId\":1234}",
  "LogicLog": [
    "GetOpenPositionSettings started for Gcid 1001, InstrumentId 1234",
    "Leverage settings resolved: default 1, max 5",
    "Max stop loss resolved from matrix: leveraged buy 50",
    "W8BEN validation: requires W8BEN, status missing",
    "Compliance: blocked"
  ],
  "LatencyTicks": ["120", "340", "95"],
  "Settings": {
    "Gcid": 1001,
    "InstrumentTypeID": 5,
    "IsBuy": true,
    "Leverage": 1,
    "BlockedByCompliance": true,
    "LeverageSettings": {"DefaultValue": 1, "MaxLeverage": 5, "PossibleLeverages": [1, 2, 5]},
    "MirrorTradingValidation": {"Rules": [{"Id": 1, "Nested": {"Deep": true}}]}
  }
}"#,
        );
        m
    }
}

impl Default for MockReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for MockReportStore {
    fn read_text(&self, path: &Path) -> ReportResult<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| ReportError::NotFound(path.display().to_string()))
    }

    fn write_text(&self, path: &Path, contents: &str) -> ReportResult<()> {
        if self.fail_writes {
            return Err(ReportError::Io(format!(
                "{}: simulated write failure",
                path.display()
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// A viewer that records which paths it was asked to open.
#[derive(Default)]
pub struct RecordingViewer {
    opened: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A viewer whose every launch fails, as if none were installed.
    pub fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl Viewer for RecordingViewer {
    fn open(&self, path: &Path) -> Result<(), ViewerError> {
        if self.fail {
            return Err(ViewerError::Unavailable);
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
