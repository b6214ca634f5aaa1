//! NoteStore trait implementation for SqliteIndex.

use super::SqliteIndex;
use crate::domain::{IndexEntry, NoteId};
use crate::index::{IndexError, IndexResult, NoteStore};
use rusqlite::{OptionalExtension, Row};

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<IndexEntry> {
    Ok(IndexEntry::new(
        NoteId::new(row.get::<_, i64>(0)?),
        row.get::<_, String>(1)?,
        row.get::<_, i64>(2)?,
    ))
}

impl SqliteIndex {
    fn id_exists(&self, id: NoteId) -> IndexResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM notes WHERE id = ?", [id.get()], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }
}

impl NoteStore for SqliteIndex {
    fn create(&mut self, created: i64) -> IndexResult<NoteId> {
        let tx = self.transaction()?;
        tx.execute(
            "INSERT INTO notes (alias, modified) VALUES ('', ?)",
            [created],
        )?;
        let id = tx.last_insert_id()?;
        tx.commit()?;

        tracing::debug!(%id, "created index entry");
        Ok(id)
    }

    fn resolve(&self, key: &str) -> IndexResult<NoteId> {
        let key = key.trim();
        let not_found = || IndexError::NoteNotFound {
            key: key.to_string(),
        };

        // An empty key would otherwise match every note without an alias.
        if key.is_empty() {
            return Err(not_found());
        }

        if let Ok(id) = key.parse::<NoteId>()
            && self.id_exists(id)?
        {
            return Ok(id);
        }

        let by_alias = self
            .conn
            .query_row(
                "SELECT id FROM notes WHERE alias = ? ORDER BY id ASC LIMIT 1",
                [key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        by_alias.map(NoteId::new).ok_or_else(not_found)
    }

    fn commit(&mut self, id: NoteId, alias: &str, modified: i64) -> IndexResult<()> {
        let rows = self.conn.execute(
            "UPDATE notes SET alias = ?1, modified = ?2 WHERE id = ?3",
            rusqlite::params![alias, modified, id.get()],
        )?;

        if rows == 0 {
            return Err(IndexError::NoteNotFound {
                key: id.to_string(),
            });
        }
        Ok(())
    }

    fn get(&self, id: NoteId) -> IndexResult<Option<IndexEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT id, alias, modified FROM notes WHERE id = ?",
                [id.get()],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    fn list_all(&self) -> IndexResult<Vec<IndexEntry>> {
        // Ids grow with insertion, so `id ASC` keeps ties in insertion order.
        let mut stmt = self
            .conn
            .prepare("SELECT id, alias, modified FROM notes ORDER BY modified DESC, id ASC")?;
        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
