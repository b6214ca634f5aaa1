//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_archive;
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::IndexEntry;
use crate::index::NoteStore;

pub fn handle_list(args: &ListArgs, archive_dir: &Path) -> Result<()> {
    let (_layout, index) = open_archive(archive_dir)?;
    let entries = index.list_all().with_context(|| "failed to list notes")?;

    print!("{}", format_listing(&entries, args.format)?);
    Ok(())
}

/// Formats entries, already in listing order, for output.
pub(crate) fn format_listing(entries: &[IndexEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let mut out = format!("Found {} notes.\n", entries.len());
            for entry in entries {
                out.push_str(&entry.label());
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = entries.iter().map(NoteListing::from).collect();
            let json = serde_json::to_string_pretty(&Output::new(listings))?;
            Ok(format!("{json}\n"))
        }
    }
}
