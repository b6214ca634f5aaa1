//! Command handlers for the CLI.

mod edit;
mod list;
mod new;
mod render;
mod view;


use anyhow::{Context, Result};
use std::path::Path;

use crate::export::TemplateSet;
use crate::index::SqliteIndex;
use crate::infra::ArchiveLayout;

// Re-export public items
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;
pub use render::handle_render;
pub use view::handle_view;

// Re-export for tests
#[cfg(test)]
pub(crate) use edit::handle_edit_impl;
#[cfg(test)]
pub(crate) use list::format_listing;
#[cfg(test)]
pub(crate) use new::handle_new_impl;
#[cfg(test)]
pub(crate) use render::handle_render_impl;
#[cfg(test)]
pub(crate) use view::{ensure_index, file_url};

// ===========================================
// Shared Utilities
// ===========================================

/// Prepares an archive for use and opens its index.
///
/// Creates the directory layout and any missing default template, so every
/// command works against a fresh directory.
pub(crate) fn open_archive(archive_dir: &Path) -> Result<(ArchiveLayout, SqliteIndex)> {
    let layout = ArchiveLayout::new(archive_dir);
    layout
        .ensure_dirs()
        .with_context(|| format!("failed to prepare archive at {}", archive_dir.display()))?;

    TemplateSet::new(layout.templates_dir())
        .ensure_defaults()
        .with_context(|| "failed to write default templates")?;

    let db_path = layout.db_path();
    let index = SqliteIndex::open(&db_path)
        .with_context(|| format!("failed to open index at {}", db_path.display()))?;

    Ok((layout, index))
}
