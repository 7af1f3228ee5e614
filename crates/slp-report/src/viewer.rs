//! Text viewer capability used to show the finished report.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::ViewerError;

/// Opens a written report for the user.
///
/// Launching is cosmetic, so callers log failures instead of propagating
/// them.
pub trait Viewer {
    fn open(&self, path: &Path) -> Result<(), ViewerError>;
}

/// Launches the platform's default text viewer, or an explicit command.
///
/// The viewer process is spawned and left running; it is not waited on.
#[derive(Debug, Clone, Default)]
pub struct SystemViewer {
    command: Option<String>,
}

impl SystemViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `command` (split with shell-word rules) instead of the platform
    /// default. The report path is appended as the last argument.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
        }
    }

    /// Program and leading arguments that will be launched.
    pub fn resolve_command(&self) -> Result<(String, Vec<String>), ViewerError> {
        let Some(command) = &self.command else {
            return default_command();
        };
        let mut tokens = shell_words::split(command)
            .map_err(|e| ViewerError::InvalidCommand(format!("{command}: {e}")))?;
        if tokens.is_empty() {
            return Err(ViewerError::InvalidCommand("empty command".into()));
        }
        let program = tokens.remove(0);
        Ok((program, tokens))
    }
}

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<(), ViewerError> {
        let (program, args) = self.resolve_command()?;
        tracing::debug!(%program, ?args, path = %path.display(), "launching viewer");
        Command::new(&program)
            .args(&args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ViewerError::Launch {
                program,
                message: e.to_string(),
            })?;
        Ok(())
    }
}

fn default_command() -> Result<(String, Vec<String>), ViewerError> {
    if cfg!(windows) {
        Ok(("notepad.exe".into(), Vec::new()))
    } else if cfg!(target_os = "macos") {
        Ok(("open".into(), vec!["-t".into()]))
    } else if cfg!(unix) {
        Ok(("xdg-open".into(), Vec::new()))
    } else {
        Err(ViewerError::Unavailable)
    }
}

/// Viewer that never launches anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn open(&self, _path: &Path) -> Result<(), ViewerError> {
        Ok(())
    }
}
