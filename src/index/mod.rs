//! SQLite-backed note store

mod repository;
mod schema;
mod sqlite;

pub use repository::{IndexError, IndexResult, NoteStore};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use sqlite::{SqliteIndex, Transaction};
