//! Path normalization

use std::path::Path;

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Display `path` relative to `root` with forward slashes, falling back to
/// the full path when it lies outside `root`.
pub fn display_relative(path: &Path, root: &Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path);
    normalize_path(&shown.to_string_lossy())
}
