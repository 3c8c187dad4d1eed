//! Theme validation and merging.

pub mod merge;

pub use merge::{apply_overrides, merge_theme, parse_raw_theme, resolve_theme};
