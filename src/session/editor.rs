//! Launching the external editor.

use std::path::Path;
use std::process::Command;

use super::EditorError;

/// Opens a file for editing and blocks until the user is done.
///
/// The exit status is not part of the contract: a crashed or killed editor
/// ends the session the same way a clean exit does.
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<(), EditorError>;
}

impl<E: EditorLauncher + ?Sized> EditorLauncher for &E {
    fn open(&self, path: &Path) -> Result<(), EditorError> {
        (**self).open(path)
    }
}

/// Runs a configured shell-free command line such as `vim` or `code --wait`.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl EditorLauncher for CommandEditor {
    fn open(&self, path: &Path) -> Result<(), EditorError> {
        // Editor command may carry arguments, e.g. "code --wait"
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(EditorError::EmptyCommand)?;

        tracing::debug!(command = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Launch {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(command = %self.command, %status, "editor exited with non-zero status");
        }

        Ok(())
    }
}
