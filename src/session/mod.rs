//! Edit sessions.
//!
//! A session opens a note in the user's editor and keeps the index and the
//! rendered site in step with the file while the editor is open. The
//! coordinator thread blocks on the editor; a scoped watcher thread polls the
//! file and commits each change it sees. When the editor exits the watcher is
//! stopped and joined, then one final commit picks up whatever the last poll
//! missed.

mod coordinator;
mod editor;
mod error;
mod watcher;

pub use coordinator::{Coordinator, DEFAULT_POLL_INTERVAL, SessionOutcome, SessionState};
pub use editor::{CommandEditor, EditorLauncher};
pub use error::{EditorError, SessionError};
pub use watcher::{WatchStats, Watcher};
