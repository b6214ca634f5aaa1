//! File I/O, frontmatter parsing, clock

mod clock;
pub mod frontmatter;
mod fs;
mod slug;

pub use clock::{Clock, SystemClock};
pub use frontmatter::{Frontmatter, FrontmatterError, ParsedNote, parse, parse_note};
pub use fs::{ArchiveLayout, FsError, modified_time, write_atomic, write_new};
pub use slug::page_slug;
