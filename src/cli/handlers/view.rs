//! View command handler.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::open_archive;
use crate::cli::config::Config;
use crate::export::Site;
use crate::index::NoteStore;

pub fn handle_view(archive_dir: &Path, config: &Config) -> Result<()> {
    let (layout, index) = open_archive(archive_dir)?;
    let site = Site::for_layout(&layout);

    let index_path = ensure_index(&site, &index)?;
    let url = file_url(&index_path)?;
    open_in_viewer(&config.viewer(), &url)
}

/// Returns the index page, rendering it from the store if it is missing.
pub(crate) fn ensure_index<S: NoteStore + ?Sized>(site: &Site, store: &S) -> Result<PathBuf> {
    let path = site.index_path();
    if path.exists() {
        return Ok(path);
    }

    let entries = store.list_all().with_context(|| "failed to list notes")?;
    site.render_index(&entries)
        .with_context(|| format!("failed to render {}", path.display()))
}

/// `file://` URL of an absolute or relative path.
pub(crate) fn file_url(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    Ok(format!("file://{}", absolute.display()))
}

/// Starts the viewer without waiting for it.
fn open_in_viewer(viewer: &str, url: &str) -> Result<()> {
    // Viewer command may carry arguments, e.g. "firefox --new-tab"
    let mut parts = viewer.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("viewer command is empty");
    };

    tracing::info!(viewer, url, "opening site");
    Command::new(program)
        .args(parts)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to launch viewer '{}'", viewer))?;

    Ok(())
}
