//! Frontmatter parser for the note header block.
//!
//! A backing file looks like this:
//!
//! ```text
//! ---
//! shortcut: compactness
//! ---
//! A space is *compact* if every open cover has a finite subcover.
//! ```
//!
//! Only the first two delimiter lines matter, so a markdown horizontal rule
//! in the body is left alone.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::export::BodyFormatter;

/// The header delimiter, matched against the trimmed line.
pub const DELIMITER: &str = "---";

/// Header key holding the note's alias. Required, may be empty.
pub const ALIAS_KEY: &str = "shortcut";

/// Errors during frontmatter parsing.
///
/// All of them mean the file is malformed right now; while an editor is open
/// they are expected and retried on the next change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("expected two '---' delimiter lines, found {found}")]
    MissingDelimiter { found: usize },

    #[error("missing required header field '{key}'")]
    MissingField { key: &'static str },

    #[error("line {line}: expected 'key: value', got '{content}'")]
    InvalidLine { line: usize, content: String },
}

/// Header fields and raw body of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
    body: String,
}

/// A note ready for rendering: alias plus formatted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNote {
    pub alias: String,
    pub body: String,
    pub rendered_body: String,
}

impl Frontmatter {
    /// Creates a header with the given alias and an empty body.
    pub fn new(alias: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(ALIAS_KEY.to_string(), alias.into());
        Self {
            fields,
            body: String::new(),
        }
    }

    /// Adds or replaces a header field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Replaces the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the alias, `""` when unset.
    pub fn alias(&self) -> &str {
        self.fields
            .get(ALIAS_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Returns a header field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns all header fields.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Returns the raw markdown body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serializes back to the backing-file format, alias field first.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&format!("{}: {}\n", ALIAS_KEY, self.alias()));
        for (key, value) in self.fields.iter().filter(|(k, _)| *k != ALIAS_KEY) {
            out.push_str(&format!("{}: {}\n", key, value));
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.body);
        out
    }

    /// Renders the body through the given formatter.
    pub fn render<F: BodyFormatter + ?Sized>(self, formatter: &F) -> ParsedNote {
        let rendered_body = formatter.format(&self.body);
        ParsedNote {
            alias: self.alias().to_string(),
            body: self.body,
            rendered_body,
        }
    }
}

/// Content written to the backing file of a freshly created note.
pub fn initial_source() -> String {
    Frontmatter::new("").with_body("\n").to_source()
}

/// Parses the header block and body of a note.
///
/// Lines before the first delimiter are ignored. Header lines are split on
/// the first `:` with key and value trimmed; blank header lines are skipped
/// and a repeated key keeps its last value.
///
/// # Errors
///
/// Returns `FrontmatterError` if:
/// - fewer than two delimiter lines exist
/// - a non-blank header line has no `:`
/// - the `shortcut` field is absent
pub fn parse(content: &str) -> Result<Frontmatter, FrontmatterError> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let mut delimiters = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == DELIMITER)
        .map(|(i, _)| i);

    let (open, close) = match (delimiters.next(), delimiters.next()) {
        (Some(open), Some(close)) => (open, close),
        (first, _) => {
            return Err(FrontmatterError::MissingDelimiter {
                found: usize::from(first.is_some()),
            });
        }
    };

    let mut fields = BTreeMap::new();
    for (offset, raw) in lines[open + 1..close].iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(FrontmatterError::InvalidLine {
                line: open + offset + 2,
                content: line.to_string(),
            });
        };
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }

    if !fields.contains_key(ALIAS_KEY) {
        return Err(FrontmatterError::MissingField { key: ALIAS_KEY });
    }

    Ok(Frontmatter {
        fields,
        body: lines[close + 1..].concat(),
    })
}

/// Parses a note and formats its body. Pure given its inputs.
pub fn parse_note<F: BodyFormatter + ?Sized>(
    content: &str,
    formatter: &F,
) -> Result<ParsedNote, FrontmatterError> {
    parse(content).map(|fm| fm.render(formatter))
}
