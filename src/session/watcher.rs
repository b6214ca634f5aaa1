//! Polling a note's backing file for changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, SystemTime};

use super::SessionError;
use crate::infra::modified_time;

/// Counters for one watch loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchStats {
    /// Changes that were committed.
    pub commits: usize,
    /// Changes skipped because the file was not readable or well formed.
    pub skipped: usize,
}

/// Polls one file's modification time at a fixed interval.
#[derive(Debug, Clone)]
pub struct Watcher {
    path: PathBuf,
    interval: Duration,
}

impl Watcher {
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            path: path.into(),
            interval,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs until `stop` receives a message or its sender is dropped.
    ///
    /// Each time the modification time differs from the last one seen,
    /// `on_change` runs. Recoverable errors are counted and the loop waits for
    /// the next change; any other error ends the loop and is returned.
    pub fn run<F>(
        &self,
        stop: &Receiver<()>,
        mut on_change: F,
    ) -> Result<WatchStats, SessionError>
    where
        F: FnMut() -> Result<(), SessionError>,
    {
        let mut stats = WatchStats::default();
        let mut last_seen: Option<SystemTime> = modified_time(&self.path).ok();

        loop {
            match stop.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }

            // The file can vanish briefly while an editor swaps in its save.
            let current = match modified_time(&self.path) {
                Ok(time) => Some(time),
                Err(err) => {
                    tracing::trace!(error = %err, "stat failed");
                    continue;
                }
            };
            if current == last_seen {
                continue;
            }
            last_seen = current;

            match on_change() {
                Ok(()) => stats.commits += 1,
                Err(err) if err.is_recoverable() => {
                    tracing::info!(path = %self.path.display(), error = %err, "skipping change");
                    stats.skipped += 1;
                }
                Err(err) => {
                    // Reported by the caller once the editor has the terminal back.
                    tracing::debug!(path = %self.path.display(), error = %err, "watcher failed");
                    return Err(err);
                }
            }
        }

        tracing::debug!(commits = stats.commits, skipped = stats.skipped, "watcher stopped");
        Ok(stats)
    }
}
