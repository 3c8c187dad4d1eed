//! Small shared helpers

pub mod paths;

pub use paths::{display_relative, normalize_path};
