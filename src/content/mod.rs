//! Content file processing shared by every command.
//!
//! - [`frontmatter`] - split a document into metadata and body
//! - [`extract`] - reduce a Markdown body to plain text
//! - [`walk`] - visit the markup files of one collection in order

pub mod extract;
pub mod frontmatter;
pub mod walk;

pub use extract::{excerpt, extract_text, truncate_chars};
pub use frontmatter::{Frontmatter, split_frontmatter};
pub use walk::{WalkStats, walk_collection};
