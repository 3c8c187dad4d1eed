//! Content glob resolution

pub mod pattern;
pub mod resolver;

pub use pattern::ContentPattern;
pub use resolver::{resolve_content_files, ContentResolver};
