//! Static site generation: the index page and one page per note.

use std::path::{Path, PathBuf};

use minijinja::context;
use minijinja::value::Value;
use serde::Serialize;

use crate::domain::IndexEntry;
use crate::export::BodyFormatter;
use crate::export::template::{INDEX_TEMPLATE, NOTE_TEMPLATE, RenderError, TemplateSet};
use crate::infra::{ArchiveLayout, page_slug, parse_note, write_atomic};

/// File name of the listing page.
pub const INDEX_PAGE: &str = "index.html";

/// A link in the index listing.
#[derive(Debug, Clone, Serialize)]
struct PageLink {
    label: String,
    href: String,
}

/// Outcome of regenerating the whole site.
#[derive(Debug, Default)]
pub struct RebuildReport {
    /// Number of note pages written.
    pub rendered: usize,
    /// Notes that could not be rendered, with the reason.
    pub failures: Vec<RebuildFailure>,
}

/// A note skipped during a rebuild.
#[derive(Debug)]
pub struct RebuildFailure {
    pub label: String,
    pub reason: String,
}

/// Renders pages from templates into the output directory.
///
/// Every render rewrites its page completely; nothing is patched in place.
#[derive(Debug, Clone)]
pub struct Site {
    templates: TemplateSet,
    out_dir: PathBuf,
}

impl Site {
    pub fn new(templates: TemplateSet, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates,
            out_dir: out_dir.into(),
        }
    }

    /// Site for an archive: `templates/` in, `html/` out.
    pub fn for_layout(layout: &ArchiveLayout) -> Self {
        Self::new(TemplateSet::new(layout.templates_dir()), layout.html_dir())
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path of the listing page.
    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_PAGE)
    }

    /// Path of the page for a note with the given display label.
    pub fn note_path(&self, label: &str) -> PathBuf {
        self.out_dir.join(page_file_name(label))
    }

    /// Rewrites the listing page from the given entries, in order.
    pub fn render_index(&self, entries: &[IndexEntry]) -> Result<PathBuf, RenderError> {
        let notes: Vec<PageLink> = entries
            .iter()
            .map(|entry| {
                let label = entry.label();
                let href = page_href(&label);
                PageLink { label, href }
            })
            .collect();

        let html = self
            .templates
            .render_page(INDEX_TEMPLATE, "Zettelkasten", context! { notes => notes })?;

        let path = self.index_path();
        write_atomic(&path, &html)?;
        tracing::debug!(path = %path.display(), notes = entries.len(), "rendered index");
        Ok(path)
    }

    /// Rewrites one note page from an already formatted body.
    pub fn render_note(&self, label: &str, rendered_body: &str) -> Result<PathBuf, RenderError> {
        let html = self.templates.render_page(
            NOTE_TEMPLATE,
            label,
            context! {
                label => label,
                content => Value::from_safe_string(rendered_body.to_string()),
            },
        )?;

        let path = self.note_path(label);
        write_atomic(&path, &html)?;
        tracing::debug!(path = %path.display(), "rendered note");
        Ok(path)
    }

    /// Regenerates every note page and the index from the given entries.
    ///
    /// Notes whose backing file is missing or malformed are reported and
    /// skipped; template and write failures abort the rebuild.
    pub fn rebuild<F: BodyFormatter + ?Sized>(
        &self,
        entries: &[IndexEntry],
        layout: &ArchiveLayout,
        formatter: &F,
    ) -> Result<RebuildReport, RenderError> {
        let mut report = RebuildReport::default();

        for entry in entries {
            let label = entry.label();
            let path = layout.note_path(entry.id());

            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| parse_note(&content, formatter).map_err(|e| e.to_string()));

            match parsed {
                Ok(note) => {
                    self.render_note(&label, &note.rendered_body)?;
                    report.rendered += 1;
                }
                Err(reason) => {
                    tracing::warn!(note = %label, %reason, "skipping note");
                    report.failures.push(RebuildFailure { label, reason });
                }
            }
        }

        self.render_index(entries)?;
        Ok(report)
    }
}

/// File name of a note page.
fn page_file_name(label: &str) -> String {
    format!("{}.html", page_slug(label))
}

/// Relative link to a note page.
///
/// Browsers decode `%XX` in links, so the escapes in the file name are
/// themselves escaped.
pub fn page_href(label: &str) -> String {
    page_file_name(label).replace('%', "%25")
}
