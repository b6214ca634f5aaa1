//! Core types: NoteId, IndexEntry

mod entry;
mod note_id;

pub use entry::{IndexEntry, display_label};
pub use note_id::{NoteId, ParseNoteIdError};
