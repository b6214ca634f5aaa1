//! Archive layout and file operations.

use crate::domain::NoteId;
use std::fs::{self, OpenOptions};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors from archive file operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("parent directory not found: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ===========================================
// ArchiveLayout
// ===========================================

/// Where everything lives inside an archive root.
///
/// ```text
/// <root>/archive.db
/// <root>/<id>.md
/// <root>/templates/{base,index,note}.html
/// <root>/html/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLayout {
    root: PathBuf,
}

impl ArchiveLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the persisted index.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("archive.db")
    }

    /// Backing file of a note; derived from the id alone.
    pub fn note_path(&self, id: NoteId) -> PathBuf {
        self.root.join(id.file_name())
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn html_dir(&self) -> PathBuf {
        self.root.join("html")
    }

    /// Creates the root, template and output directories if missing.
    pub fn ensure_dirs(&self) -> Result<(), FsError> {
        for dir in [self.root.clone(), self.templates_dir(), self.html_dir()] {
            fs::create_dir_all(&dir).map_err(|e| FsError::io(&dir, e))?;
        }
        Ok(())
    }

    /// Writes a new note's backing file, refusing to touch an existing one.
    pub fn create_note_file(&self, id: NoteId, content: &str) -> Result<PathBuf, FsError> {
        let path = self.note_path(id);
        write_new(&path, content)?;
        Ok(path)
    }
}

// ===========================================
// File helpers
// ===========================================

/// Returns a file's last modification time.
pub fn modified_time(path: &Path) -> Result<SystemTime, FsError> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| FsError::io(path, e))
}

/// Creates a file with the given content; fails if it already exists.
pub fn write_new(path: &Path, content: &str) -> Result<(), FsError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
            _ => FsError::io(path, e),
        })?;
    file.write_all(content.as_bytes())
        .map_err(|e| FsError::io(path, e))
}

/// Writes a file atomically.
///
/// Uses a temporary file in the same directory and a rename, so readers (a
/// browser refreshing the site, say) never observe a partial write. The
/// parent directory must exist.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.exists() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::io(path, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::io(path, e))?;
    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
