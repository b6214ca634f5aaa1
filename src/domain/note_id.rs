//! Integer note identifier assigned by the index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique, monotonically increasing note identifier.
///
/// Ids are allocated by the note store on creation and never reused. The
/// decimal form doubles as the backing file stem (`<id>.md`) and as the
/// display label of a note without an alias.
///
/// # Examples
///
/// ```
/// use zettel::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw row id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the backing file name for this note.
    pub fn file_name(self) -> String {
        format!("{}.md", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when a string is not a valid note id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected a positive integer", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    /// Accepts plain decimal digits only, so aliases like `+5` or `1e3`
    /// are never mistaken for ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNoteIdError {
            value: s.to_string(),
        };

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        match s.parse::<i64>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(err()),
        }
    }
}
