//! User-editable page templates.
//!
//! Three templates live in the archive's `templates/` directory:
//!
//! - `base.html`: page shell with the single `{{ main }}` insertion point
//! - `index.html`: listing section, iterates `notes` (`label`, `href`)
//! - `note.html`: single note section with `label` and `content`
//!
//! A missing template is written from the built-in default the first time
//! it is needed. An existing file is never overwritten.

use std::io;
use std::path::PathBuf;

use minijinja::value::Value;
use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

use crate::infra::{FsError, write_new};

pub const BASE_TEMPLATE: &str = "base.html";
pub const INDEX_TEMPLATE: &str = "index.html";
pub const NOTE_TEMPLATE: &str = "note.html";

/// Default page shell. Loads MathJax for `$...$` and `$$...$$` math.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <script>
      MathJax = {
        tex: {
          inlineMath: [['$', '$']],
          displayMath: [['$$', '$$']]
        },
        svg: {
          fontCache: 'global'
        }
      };
    </script>
    <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
</head>
<body>
{{ main }}
</body>
</html>
"##;

/// Default listing section.
pub const DEFAULT_INDEX_TEMPLATE: &str = r##"<h1>Zettelkasten</h1>
<p class="note-count">{{ notes | length }} note{% if notes | length != 1 %}s{% endif %}</p>
<ul>
{% for note in notes %}
    <li><a href="{{ note.href }}">{{ note.label }}</a></li>
{% endfor %}
</ul>
"##;

/// Default single-note section.
pub const DEFAULT_NOTE_TEMPLATE: &str = r##"<nav><a href="index.html">Zettelkasten</a></nav>
<code>{{ label }}</code>
<article>
{{ content }}
</article>
"##;

const DEFAULTS: [(&str, &str); 3] = [
    (BASE_TEMPLATE, DEFAULT_BASE_TEMPLATE),
    (INDEX_TEMPLATE, DEFAULT_INDEX_TEMPLATE),
    (NOTE_TEMPLATE, DEFAULT_NOTE_TEMPLATE),
];

/// Errors while rendering or writing pages.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Write(#[from] FsError),
}

/// The template directory of an archive.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    dir: PathBuf,
}

impl TemplateSet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of a template file by name.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Writes any missing default template and returns the ones created.
    pub fn ensure_defaults(&self) -> Result<Vec<PathBuf>, RenderError> {
        let mut created = Vec::new();
        for (name, _) in DEFAULTS {
            if self.ensure(name)? {
                created.push(self.path(name));
            }
        }
        Ok(created)
    }

    /// Writes the default for `name` if the file does not exist yet.
    ///
    /// Returns whether a file was created.
    fn ensure(&self, name: &str) -> Result<bool, RenderError> {
        let default = DEFAULTS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, source)| *source)
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_string()))?;

        let path = self.path(name);
        match write_new(&path, default) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "wrote default template");
                Ok(true)
            }
            Err(FsError::AlreadyExists { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads a template, creating it from the default first if missing.
    pub fn load(&self, name: &str) -> Result<String, RenderError> {
        self.ensure(name)?;
        let path = self.path(name);
        std::fs::read_to_string(&path).map_err(|source| RenderError::Io { path, source })
    }

    /// Renders a section template and wraps it in the page shell.
    ///
    /// Templates are read from disk on every call so edits made while a
    /// session is running show up on the next commit. Both templates are
    /// registered under their `.html` names, so values are HTML-escaped
    /// unless passed as safe strings.
    pub fn render_page<C: Serialize>(
        &self,
        section: &str,
        title: &str,
        ctx: C,
    ) -> Result<String, RenderError> {
        let base_source = self.load(BASE_TEMPLATE)?;
        let section_source = self.load(section)?;

        let mut env = Environment::new();
        env.add_template(BASE_TEMPLATE, &base_source)?;
        env.add_template(section, &section_source)?;

        let main = env.get_template(section)?.render(ctx)?;
        let page = env.get_template(BASE_TEMPLATE)?.render(context! {
            title => title,
            main => Value::from_safe_string(main),
        })?;

        Ok(page)
    }
}
