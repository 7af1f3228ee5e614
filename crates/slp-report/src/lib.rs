//! LogicLog report rendering for settings-resolution JSON logs.
//!
//! Reads one `LogRecord` JSON document, joins its `LogicLog` trace lines with
//! blank-line separators and writes them as a plain-text report. Storage and
//! the "open in a text viewer" side effect sit behind the `ReportStore` and
//! `Viewer` traits so the whole flow runs against mocks in tests.

pub mod config;
pub mod error;
pub mod mock;
pub mod render;
pub mod runner;
pub mod settings;
pub mod store;
pub mod types;
pub mod viewer;

// Re-export key types for convenience
pub use config::ReportConfig;
pub use error::{ReportError, ReportResult, ViewerError};
pub use mock::{MockReportStore, RecordingViewer};
pub use render::{parse_record, render_report};
pub use runner::{open_report, run};
pub use settings::OpenPositionSettings;
pub use store::{FileReportStore, ReportStore};
pub use types::{LineEnding, LogRecord, ReportOutcome};
pub use viewer::{NoopViewer, SystemViewer, Viewer};
