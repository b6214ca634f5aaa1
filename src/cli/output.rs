//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::IndexEntry;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: i64,
    pub alias: String,
    pub label: String,
    /// Last commit time, unix seconds.
    pub modified: i64,
}

impl From<&IndexEntry> for NoteListing {
    fn from(entry: &IndexEntry) -> Self {
        Self {
            id: entry.id().get(),
            alias: entry.alias().to_string(),
            label: entry.label(),
            modified: entry.modified(),
        }
    }
}
