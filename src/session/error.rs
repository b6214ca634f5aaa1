//! Session and editor error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::export::RenderError;
use crate::index::IndexError;
use crate::infra::{FrontmatterError, FsError};

/// Errors from launching the external editor.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor command is empty")]
    EmptyCommand,

    #[error("failed to launch editor '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Errors that end or interrupt an edit session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("malformed frontmatter: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Fs(#[from] FsError),

    /// A fresh id collided with a file already on disk.
    #[error("note file already exists: {path}")]
    NoteFileExists { path: PathBuf },

    /// The index knows the note but its backing file is gone.
    #[error("note file is missing: {path}")]
    MissingNoteFile { path: PathBuf },

    #[error("failed to read note {path}: {source}")]
    ReadNote {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("watcher thread panicked")]
    WatcherPanicked,
}

impl SessionError {
    /// Whether a live commit may skip this error and wait for the next change.
    ///
    /// Half-written headers and reads racing an editor's save are expected
    /// while the user is typing; everything else stops the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Frontmatter(_) | Self::ReadNote { .. })
    }
}
