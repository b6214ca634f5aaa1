//! Edit command handler.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use super::open_archive;
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::export::Markdown;
use crate::infra::SystemClock;
use crate::session::{CommandEditor, Coordinator, EditorLauncher, SessionOutcome};

pub fn handle_edit(args: &EditArgs, archive_dir: &Path, config: &Config) -> Result<()> {
    let editor = CommandEditor::new(config.editor());
    let outcome = handle_edit_impl(args, archive_dir, &editor, config.poll_interval())?;

    println!("Saved {} [{}]", outcome.label, outcome.id);
    Ok(())
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    archive_dir: &Path,
    editor: &E,
    poll_interval: Duration,
) -> Result<SessionOutcome> {
    let (layout, index) = open_archive(archive_dir)?;

    let mut coordinator = Coordinator::new(index, layout, editor, SystemClock, Markdown)
        .with_poll_interval(poll_interval);

    coordinator
        .edit(&args.key)
        .with_context(|| format!("failed to edit note '{}'", args.key))
}
