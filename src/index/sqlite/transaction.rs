//! Write transactions for the note store.

use crate::domain::NoteId;
use crate::index::{IndexError, IndexResult};
use rusqlite::{Connection, Params};

/// A write transaction holding the database lock until it ends.
///
/// Started with `BEGIN IMMEDIATE`, so two processes allocating ids never
/// interleave. Rolls back on drop unless committed.
pub struct Transaction<'a> {
    conn: &'a Connection,
    open: bool,
}

impl<'a> Transaction<'a> {
    /// Takes the write lock and starts the transaction.
    pub(crate) fn begin(conn: &'a Connection) -> IndexResult<Self> {
        conn.execute_batch("BEGIN IMMEDIATE")?;
        Ok(Self { conn, open: true })
    }

    /// Executes a statement inside the transaction.
    pub fn execute(&self, sql: &str, params: impl Params) -> IndexResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Id of the row inserted last on this connection.
    pub fn last_insert_id(&self) -> IndexResult<NoteId> {
        match self.conn.last_insert_rowid() {
            raw if raw > 0 => Ok(NoteId::new(raw)),
            raw => Err(IndexError::InvalidData(format!(
                "database assigned non-positive id {raw}"
            ))),
        }
    }

    /// Commits; a failed commit is rolled back on drop.
    pub fn commit(mut self) -> IndexResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.open = false;
        Ok(())
    }

    pub fn rollback(mut self) -> IndexResult<()> {
        self.open = false;
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.open
            && let Err(err) = self.conn.execute_batch("ROLLBACK")
        {
            tracing::warn!(error = %err, "rollback of abandoned transaction failed");
        }
    }
}
