//! SQLite-backed note store implementation.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// SqliteIndex Struct
// ===========================================

/// SQLite-backed note index.
///
/// Owns the database connection. The connection is `Send`, so an index can
/// be lent to the watcher thread for the duration of an edit session.
pub struct SqliteIndex {
    pub(crate) conn: Connection,
}
