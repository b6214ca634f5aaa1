//! Index entry: the persisted projection of a note's metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::NoteId;

/// A note as stored in the index.
///
/// The body never lives here; it is read from the backing file when needed.
/// An empty alias means "unset" and the note is addressed by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    id: NoteId,
    alias: String,
    modified: i64,
}

impl IndexEntry {
    /// Creates an entry from its stored fields.
    pub fn new(id: NoteId, alias: impl Into<String>, modified: i64) -> Self {
        Self {
            id,
            alias: alias.into(),
            modified,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the alias, or `""` when unset.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the last commit time in unix seconds.
    pub fn modified(&self) -> i64 {
        self.modified
    }

    /// Returns the last commit time as a UTC datetime, if representable.
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.modified, 0)
    }

    /// Returns the display label: the alias if set, else the decimal id.
    ///
    /// ```
    /// use zettel::domain::{IndexEntry, NoteId};
    ///
    /// assert_eq!(IndexEntry::new(NoteId::new(7), "", 0).label(), "7");
    /// assert_eq!(IndexEntry::new(NoteId::new(7), "groups", 0).label(), "groups");
    /// ```
    pub fn label(&self) -> String {
        display_label(self.id, &self.alias)
    }
}

/// Display label for a note with the given id and alias.
pub fn display_label(id: NoteId, alias: &str) -> String {
    if alias.is_empty() {
        id.to_string()
    } else {
        alias.to_string()
    }
}
