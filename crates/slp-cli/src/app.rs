//! The shell flow: run the report, tell the user, hand it to a viewer.

use slp_report::{
    FileReportStore, NoopViewer, ReportOutcome, ReportStore, SystemViewer, Viewer, open_report,
};

use crate::config::AppConfig;

/// Viewer selected by `config`.
pub fn viewer_for(config: &AppConfig) -> Box<dyn Viewer> {
    if !config.open_viewer {
        return Box::new(NoopViewer);
    }
    match &config.viewer_command {
        Some(command) => Box::new(SystemViewer::with_command(command.clone())),
        None => Box::new(SystemViewer::new()),
    }
}

/// Run the report against the local filesystem and open it with `viewer`.
///
/// Whether anything opens is up to `viewer`; see [`viewer_for`].
pub fn execute(config: &AppConfig, viewer: &dyn Viewer) -> anyhow::Result<ReportOutcome> {
    execute_with_store(config, &FileReportStore, viewer)
}

/// Same as [`execute`] with an explicit store.
pub fn execute_with_store(
    config: &AppConfig,
    store: &dyn ReportStore,
    viewer: &dyn Viewer,
) -> anyhow::Result<ReportOutcome> {
    println!("Loading JSON file...");
    let outcome = slp_report::run(&config.report, store)?;
    println!(
        "Finished writing results: {} ({} entries)",
        outcome.output_path.display(),
        outcome.entries
    );

    open_report(viewer, &outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slp_report::{LineEnding, MockReportStore, RecordingViewer, ReportError};
    use std::path::{Path, PathBuf};

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.report = config
            .report
            .with_input_path(Some("a.json"))
            .with_line_ending(LineEnding::Lf);
        config
    }

    #[test]
    fn execute_opens_report_when_enabled() {
        let store = MockReportStore::with_sample();
        let viewer = RecordingViewer::new();
        let outcome = execute_with_store(&config(), &store, &viewer).unwrap();
        assert_eq!(outcome.entries, 5);
        assert_eq!(viewer.opened(), vec![PathBuf::from("Result.txt")]);
    }

    #[test]
    fn disabled_viewer_never_launches() {
        let mut config = config();
        config.viewer_command = Some("slp-no-such-viewer-binary".into());
        assert!(viewer_for(&config).open(Path::new("Result.txt")).is_err());

        config.open_viewer = false;
        assert!(viewer_for(&config).open(Path::new("Result.txt")).is_ok());
    }

    #[test]
    fn disabled_config_runs_with_noop_viewer() {
        let store = MockReportStore::with_sample();
        let mut config = config();
        config.open_viewer = false;
        let viewer = viewer_for(&config);
        let outcome = execute_with_store(&config, &store, viewer.as_ref()).unwrap();
        assert_eq!(outcome.entries, 5);
    }

    #[test]
    fn viewer_failure_still_succeeds() {
        let store = MockReportStore::with_sample();
        let outcome = execute_with_store(&config(), &store, &RecordingViewer::failing());
        assert!(outcome.is_ok());
    }

    #[test]
    fn report_error_surfaces_through_anyhow() {
        let store = MockReportStore::new();
        let viewer = RecordingViewer::new();
        let err = execute_with_store(&config(), &store, &viewer).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::NotFound(_))
        ));
        assert!(viewer.opened().is_empty());
    }
}
