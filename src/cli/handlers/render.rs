//! Render command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_archive;
use crate::export::{Markdown, RebuildReport, Site};
use crate::index::NoteStore;

pub fn handle_render(archive_dir: &Path) -> Result<()> {
    let report = handle_render_impl(archive_dir)?;

    for failure in &report.failures {
        eprintln!("  skipped: {}: {}", failure.label, failure.reason);
    }
    if report.failures.is_empty() {
        println!("Rendered {} notes", report.rendered);
    } else {
        println!(
            "Rendered {} notes, skipped {}",
            report.rendered,
            report.failures.len()
        );
    }
    Ok(())
}

pub(crate) fn handle_render_impl(archive_dir: &Path) -> Result<RebuildReport> {
    let (layout, index) = open_archive(archive_dir)?;
    let entries = index.list_all().with_context(|| "failed to list notes")?;

    Site::for_layout(&layout)
        .rebuild(&entries, &layout, &Markdown)
        .with_context(|| format!("failed to render site in {}", layout.html_dir().display()))
}
