//! Connection management for SqliteIndex.

use super::SqliteIndex;
use super::transaction::Transaction;
use crate::index::{IndexError, IndexResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for another process holding the lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl SqliteIndex {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory database with the note schema.
    ///
    /// Useful for tests and throwaway indexes.
    pub fn open_in_memory() -> IndexResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates the index database at the given path.
    ///
    /// Creates parent directories if they don't exist and initializes the
    /// schema for a new database. Any failure here means the archive cannot
    /// be used at all, so it is reported as [`IndexError::Unavailable`].
    pub fn open(path: &Path) -> IndexResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| IndexError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let unavailable = |source| IndexError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(unavailable)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(unavailable)?;
        create_schema(&conn).map_err(unavailable)?;

        tracing::debug!(path = %path.display(), "opened index");
        Ok(Self { conn })
    }

    // ===========================================
    // Connection Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a write transaction, taking the database write lock up front.
    ///
    /// The transaction will automatically rollback on drop unless `commit()`
    /// is called.
    pub fn transaction(&mut self) -> IndexResult<Transaction<'_>> {
        Transaction::begin(&self.conn)
    }
}
