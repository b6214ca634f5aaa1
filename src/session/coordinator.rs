//! One edit session: editor in the foreground, watcher in the background,
//! and a final commit once both have stopped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::{EditorLauncher, SessionError, Watcher};
use crate::domain::{NoteId, display_label};
use crate::export::{BodyFormatter, Site};
use crate::index::NoteStore;
use crate::infra::frontmatter::initial_source;
use crate::infra::{ArchiveLayout, Clock, FsError, parse_note};

/// Default watcher poll interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Lifecycle of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Launching,
    Editing,
    Finalizing,
    Done,
}

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub id: NoteId,
    /// Display label after the final commit.
    pub label: String,
    /// Commits made by the watcher while the editor was open.
    pub live_commits: usize,
    /// Changes the watcher skipped because the note was mid-edit.
    pub skipped_changes: usize,
}

// ===========================================
// Commit cycle
// ===========================================

/// Parse, persist, render: everything one detected change triggers.
struct CommitCycle<'a, C: ?Sized, F: ?Sized> {
    id: NoteId,
    path: &'a Path,
    site: &'a Site,
    clock: &'a C,
    formatter: &'a F,
}

impl<C, F> CommitCycle<'_, C, F>
where
    C: Clock + ?Sized,
    F: BodyFormatter + ?Sized,
{
    /// Runs one cycle and returns the note's new display label.
    ///
    /// Nothing is written unless the file parses, and the store is updated
    /// before any page is rendered.
    fn run<S: NoteStore + ?Sized>(&self, store: &mut S) -> Result<String, SessionError> {
        let content = fs::read_to_string(self.path).map_err(|source| SessionError::ReadNote {
            path: self.path.to_path_buf(),
            source,
        })?;
        let note = parse_note(&content, self.formatter)?;

        store.commit(self.id, &note.alias, self.clock.now())?;

        let label = display_label(self.id, &note.alias);
        self.site.render_note(&label, &note.rendered_body)?;
        self.site.render_index(&store.list_all()?)?;

        tracing::info!(id = %self.id, note = %label, "committed");
        Ok(label)
    }
}

// ===========================================
// Coordinator
// ===========================================

/// Runs edit sessions against a note store and a rendered site.
///
/// One session runs at a time; `new_note` and `edit` take `&mut self`.
pub struct Coordinator<S, E, C, F> {
    store: S,
    site: Site,
    layout: ArchiveLayout,
    editor: E,
    clock: C,
    formatter: F,
    poll_interval: Duration,
    state: SessionState,
}

impl<S, E, C, F> Coordinator<S, E, C, F>
where
    S: NoteStore + Send,
    E: EditorLauncher,
    C: Clock + Sync,
    F: BodyFormatter + Sync,
{
    pub fn new(store: S, layout: ArchiveLayout, editor: E, clock: C, formatter: F) -> Self {
        Self {
            store,
            site: Site::for_layout(&layout),
            layout,
            editor,
            clock,
            formatter,
            poll_interval: DEFAULT_POLL_INTERVAL,
            state: SessionState::Idle,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// State of the most recent session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Creates a note with an empty header and runs an edit session on it.
    pub fn new_note(&mut self) -> Result<SessionOutcome, SessionError> {
        self.enter(SessionState::Idle);
        let id = self.store.create(self.clock.now())?;
        self.enter(SessionState::Launching);

        let path = self
            .layout
            .create_note_file(id, &initial_source())
            .map_err(|err| match err {
                FsError::AlreadyExists { path } => SessionError::NoteFileExists { path },
                other => other.into(),
            })?;
        tracing::info!(%id, path = %path.display(), "created note");

        self.run_session(id, path)
    }

    /// Resolves an id or alias and runs an edit session on that note.
    pub fn edit(&mut self, key: &str) -> Result<SessionOutcome, SessionError> {
        self.enter(SessionState::Idle);
        let id = self.store.resolve(key)?;
        self.enter(SessionState::Launching);

        let path = self.layout.note_path(id);
        if !path.is_file() {
            return Err(SessionError::MissingNoteFile { path });
        }

        self.run_session(id, path)
    }

    fn run_session(&mut self, id: NoteId, path: PathBuf) -> Result<SessionOutcome, SessionError> {
        self.enter(SessionState::Editing);

        let cycle = CommitCycle {
            id,
            path: &path,
            site: &self.site,
            clock: &self.clock,
            formatter: &self.formatter,
        };
        let watcher = Watcher::new(&path, self.poll_interval);
        let store = &mut self.store;
        let editor = &self.editor;

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (launched, watched) = thread::scope(|scope| {
            let cycle = &cycle;
            let watcher = &watcher;
            let live_store = &mut *store;
            let handle = scope.spawn(move || {
                watcher.run(&stop_rx, || cycle.run(&mut *live_store).map(|_| ()))
            });

            let launched = editor.open(&path);
            drop(stop_tx);

            let watched = handle
                .join()
                .map_err(|_| SessionError::WatcherPanicked)
                .and_then(|stats| stats);
            (launched, watched)
        });

        self.state = SessionState::Finalizing;
        tracing::debug!(%id, state = ?self.state, "session state");

        let result = launched
            .map_err(SessionError::from)
            .and_then(|()| watched)
            .and_then(|stats| {
                let label = cycle.run(&mut *store)?;
                Ok(SessionOutcome {
                    id,
                    label,
                    live_commits: stats.commits,
                    skipped_changes: stats.skipped,
                })
            });

        self.state = SessionState::Done;
        tracing::debug!(%id, state = ?self.state, "session state");
        result
    }

    fn enter(&mut self, state: SessionState) {
        tracing::debug!(from = ?self.state, to = ?state, "session state");
        self.state = state;
    }
}
