//! Rendering of notes into a static HTML site.
//!
//! Bodies are formatted from markdown, wrapped in user-editable templates
//! and written to the archive's `html/` directory.

mod html;
pub mod site;
pub mod template;

pub use html::{BodyFormatter, Markdown, markdown_to_html};
pub use site::{RebuildFailure, RebuildReport, Site, page_href};
pub use template::{RenderError, TemplateSet};
