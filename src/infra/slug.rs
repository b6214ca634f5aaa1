//! Output file names for rendered pages.

use std::fmt::Write;

/// Stem of the listing page; no label maps onto it.
const RESERVED_STEM: &str = "index";

/// Converts a display label into a page file stem, one stem per label.
///
/// - Keeps ASCII alphanumerics, hyphens and underscores
/// - Writes every other byte of the UTF-8 label as `%XX` (dots included, so
///   a stem never starts with a dot or contains a path separator)
/// - Escapes the first byte of `index`, which names the listing page
/// - Returns `%` for the empty label
///
/// Distinct labels always give distinct stems: the encoding can be read
/// back byte for byte.
///
/// # Examples
///
/// ```
/// use zettel::infra::page_slug;
///
/// assert_eq!(page_slug("42"), "42");
/// assert_eq!(page_slug("Stone-Cech"), "Stone-Cech");
/// assert_eq!(page_slug("a/b c"), "a%2Fb%20c");
/// assert_eq!(page_slug("index"), "%69ndex");
/// ```
pub fn page_slug(label: &str) -> String {
    if label.is_empty() {
        return "%".to_string();
    }

    let mut slug = String::with_capacity(label.len());
    for byte in label.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            slug.push(char::from(byte));
        } else {
            let _ = write!(slug, "%{byte:02X}");
        }
    }

    if slug == RESERVED_STEM {
        return format!("%{:02X}{}", b'i', &slug[1..]);
    }
    slug
}
