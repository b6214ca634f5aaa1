//! NoteStore trait and result types.

use crate::domain::{IndexEntry, NoteId};
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// IndexError Type
// ===========================================

/// Errors that can occur during index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// No note matched the given id or alias.
    #[error("note not found: '{key}'")]
    NoteNotFound { key: String },

    /// The index database could not be opened or initialised.
    #[error("index unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be interpreted.
    #[error("invalid index data: {0}")]
    InvalidData(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

// ===========================================
// NoteStore Trait
// ===========================================

/// Persistent mapping from note identity to its mutable metadata.
///
/// Implementations must allocate ids atomically and keep `list_all`
/// ordered by recency with ties in insertion order.
pub trait NoteStore {
    /// Allocates the next id and inserts an entry with an empty alias.
    fn create(&mut self, created: i64) -> IndexResult<NoteId>;

    /// Resolves a literal id or an alias to a note id.
    ///
    /// An id match takes precedence over an alias that happens to look like
    /// an id. Among duplicate aliases the oldest note wins.
    fn resolve(&self, key: &str) -> IndexResult<NoteId>;

    /// Overwrites the alias and modification time of an existing entry.
    fn commit(&mut self, id: NoteId, alias: &str, modified: i64) -> IndexResult<()>;

    /// Retrieves a single entry by id.
    fn get(&self, id: NoteId) -> IndexResult<Option<IndexEntry>>;

    /// Lists all entries, most recently modified first.
    fn list_all(&self) -> IndexResult<Vec<IndexEntry>>;
}

impl<S: NoteStore + ?Sized> NoteStore for &mut S {
    fn create(&mut self, created: i64) -> IndexResult<NoteId> {
        (**self).create(created)
    }

    fn resolve(&self, key: &str) -> IndexResult<NoteId> {
        (**self).resolve(key)
    }

    fn commit(&mut self, id: NoteId, alias: &str, modified: i64) -> IndexResult<()> {
        (**self).commit(id, alias, modified)
    }

    fn get(&self, id: NoteId) -> IndexResult<Option<IndexEntry>> {
        (**self).get(id)
    }

    fn list_all(&self) -> IndexResult<Vec<IndexEntry>> {
        (**self).list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_key() {
        let err = IndexError::NoteNotFound {
            key: "groups".to_string(),
        };
        assert_eq!(err.to_string(), "note not found: 'groups'");
    }

    #[test]
    fn unavailable_message_names_path() {
        let err = IndexError::Unavailable {
            path: PathBuf::from("/nowhere/archive.db"),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(err.to_string().contains("/nowhere/archive.db"));
    }
}
