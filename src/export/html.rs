//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Turns a note's raw body into rendered markup.
///
/// Implementations must be pure and total: every input string produces
/// output, and the same input always produces the same output.
pub trait BodyFormatter {
    fn format(&self, body: &str) -> String;
}

/// The markdown body formatter used for the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl BodyFormatter for Markdown {
    fn format(&self, body: &str) -> String {
        markdown_to_html(body)
    }
}

/// Converts markdown text to HTML.
///
/// Enables common markdown extensions:
/// - Tables
/// - Footnotes
/// - Strikethrough
/// - Task lists
///
/// # Example
///
/// ```
/// use zettel::export::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
