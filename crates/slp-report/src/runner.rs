//! The report run: read, parse, render, write. Plus the viewer hand-off.

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::render::{parse_record, render_report};
use crate::store::ReportStore;
use crate::types::ReportOutcome;
use crate::viewer::Viewer;

/// Produce the report described by `config`.
///
/// Read and parse failures return before anything is written, so a failed
/// run never leaves a fresh output file behind.
pub fn run(config: &ReportConfig, store: &dyn ReportStore) -> ReportResult<ReportOutcome> {
    let input_path = config.input_path();
    tracing::info!(path = %input_path.display(), "loading log document");

    let text = store.read_text(input_path)?;
    let record = parse_record(&text)?;
    tracing::debug!(
        request_id = record.request_id.as_deref().unwrap_or("-"),
        entries = record.logic_log.len(),
        latency_ticks = record.latency_ticks.len(),
        "log document parsed"
    );

    match record.open_position_settings() {
        Some(settings) => tracing::debug!(
            gcid = ?settings.gcid,
            instrument_type = ?settings.instrument_type_id,
            leverage = ?settings.effective_leverage(),
            blocked_by_compliance = ?settings.blocked_by_compliance,
            "open position settings"
        ),
        None if record.settings.is_some() => {
            tracing::debug!("settings present but not in the open-position shape");
        }
        None => {}
    }

    let report = render_report(&record.logic_log, config.line_ending);
    store.write_text(&config.output_path, &report)?;

    tracing::info!(
        path = %config.output_path.display(),
        entries = record.logic_log.len(),
        bytes = report.len(),
        "report written"
    );

    Ok(ReportOutcome {
        input_path: input_path.to_path_buf(),
        output_path: config.output_path.clone(),
        entries: record.logic_log.len(),
        bytes: report.len(),
    })
}

/// Ask `viewer` to show the report. Returns whether it launched.
///
/// A failure is logged and swallowed.
pub fn open_report(viewer: &dyn Viewer, outcome: &ReportOutcome) -> bool {
    match viewer.open(&outcome.output_path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %outcome.output_path.display(),
                "could not open report in a viewer"
            );
            false
        }
    }
}
