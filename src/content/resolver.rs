//! Expand content patterns into the set of files to scan

use super::pattern::{compile_patterns, ContentPattern};
use crate::error::ResolveError;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Resolves content globs against a directory tree.
///
/// Hidden files are visited and `.gitignore` rules are ignored unless
/// [`respect_gitignore`](Self::respect_gitignore) is set.
#[derive(Debug, Clone, Default)]
pub struct ContentResolver {
    respect_gitignore: bool,
    follow_symlinks: bool,
}

impl ContentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to skip files excluded by gitignore rules
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Expand `patterns` against `root` and union the matches.
    ///
    /// All patterns are parsed before the filesystem is touched, so a
    /// malformed pattern fails the call without returning any files. A
    /// pattern that matches nothing is not an error.
    pub fn resolve(&self, patterns: &[String], root: &Path) -> Result<BTreeSet<PathBuf>, ResolveError> {
        let compiled = compile_patterns(patterns, root)?;

        if !root.is_dir() {
            return Err(ResolveError::RootNotFound { root: root.to_path_buf() });
        }

        let (excludes, includes): (Vec<&ContentPattern>, Vec<&ContentPattern>) =
            compiled.iter().partition(|p| p.negated);

        let mut files = BTreeSet::new();
        for pattern in &includes {
            let before = files.len();
            self.expand(pattern, &mut files);
            debug!(pattern = %pattern.raw, matched = files.len() - before, "expanded content pattern");
        }

        if !excludes.is_empty() {
            files.retain(|path| !excludes.iter().any(|p| p.matches(path)));
        }

        debug!(patterns = patterns.len(), files = files.len(), "resolved content files");
        Ok(files)
    }

    fn expand(&self, pattern: &ContentPattern, files: &mut BTreeSet<PathBuf>) {
        if pattern.is_literal() {
            if pattern.base.is_file() {
                files.insert(pattern.base.clone());
            }
            return;
        }

        if !pattern.base.is_dir() {
            trace!(base = %pattern.base.display(), "pattern base does not exist");
            return;
        }

        let mut builder = WalkBuilder::new(&pattern.base);
        builder
            .standard_filters(false)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .parents(self.respect_gitignore)
            .follow_links(self.follow_symlinks)
            .max_depth(pattern.max_depth());

        for entry_result in builder.build() {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    debug!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if pattern.matches(path) {
                files.insert(path.to_path_buf());
            }
        }
    }
}

/// Expand `patterns` relative to `root_dir` with default resolver settings.
pub fn resolve_content_files<P: AsRef<Path>>(
    patterns: &[String],
    root_dir: P,
) -> Result<BTreeSet<PathBuf>, ResolveError> {
    ContentResolver::new().resolve(patterns, root_dir.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn relative(root: &Path, files: &BTreeSet<PathBuf>) -> Vec<String> {
        files
            .iter()
            .map(|p| crate::utils::normalize_path(p.strip_prefix(root).unwrap().to_str().unwrap()))
            .collect()
    }

    fn site() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("templates/sub")).unwrap();
        fs::create_dir_all(root.join("main/templates/main")).unwrap();
        fs::create_dir_all(root.join("static")).unwrap();
        fs::write(root.join("templates/index.html"), "<h1 class=\"font-heading\"></h1>").unwrap();
        fs::write(root.join("templates/sub/page.html"), "<p class=\"font-sans\"></p>").unwrap();
        fs::write(root.join("main/templates/main/home.html"), "<div></div>").unwrap();
        fs::write(root.join("static/app.js"), "console.log(1)").unwrap();
        temp_dir
    }

    #[test]
    fn test_resolves_nested_templates() {
        let temp_dir = site();
        let root = temp_dir.path();

        let files = resolve_content_files(&patterns(&["./templates/**/*.html"]), root).unwrap();
        assert_eq!(relative(root, &files), ["templates/index.html", "templates/sub/page.html"]);
    }

    #[test]
    fn test_overlapping_patterns_are_deduplicated() {
        let temp_dir = site();
        let root = temp_dir.path();

        let files = resolve_content_files(
            &patterns(&[
                "./templates/**/*.html",
                "./main/templates/**/*.html",
                "./**/templates/**/*.html",
            ]),
            root,
        )
        .unwrap();

        assert_eq!(
            relative(root, &files),
            [
                "main/templates/main/home.html",
                "templates/index.html",
                "templates/sub/page.html"
            ]
        );
    }

    #[test]
    fn test_parent_spelling_does_not_duplicate_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("site");
        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(root.join("templates/index.html"), "<main></main>").unwrap();

        let files = resolve_content_files(
            &patterns(&["./templates/*.html", "../site/templates/*.html"]),
            &root,
        )
        .unwrap();
        assert_eq!(files.len(), 1, "got: {:?}", files);
        assert_eq!(relative(&root, &files), ["templates/index.html"]);
    }

    #[test]
    fn test_empty_patterns_yield_no_files() {
        let temp_dir = site();
        let files = resolve_content_files(&[], temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_directory_matches_nothing() {
        let temp_dir = site();
        let files =
            resolve_content_files(&patterns(&["./not-yet/**/*.html"]), temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_malformed_pattern_fails() {
        let temp_dir = site();
        let result = resolve_content_files(&patterns(&["./templates/**/*.html", "["]), temp_dir.path());
        match result {
            Err(ResolveError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "["),
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_negated_pattern_removes_files() {
        let temp_dir = site();
        let root = temp_dir.path();

        let files =
            resolve_content_files(&patterns(&["!./templates/sub/**", "./**/*.html"]), root).unwrap();
        assert_eq!(relative(root, &files), ["main/templates/main/home.html", "templates/index.html"]);
    }

    #[test]
    fn test_literal_pattern_selects_single_file() {
        let temp_dir = site();
        let root = temp_dir.path();

        let files =
            resolve_content_files(&patterns(&["./static/app.js", "./static/missing.js"]), root)
                .unwrap();
        assert_eq!(relative(root, &files), ["static/app.js"]);
    }

    #[test]
    fn test_hidden_files_are_visited() {
        let temp_dir = site();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".storybook")).unwrap();
        fs::write(root.join(".storybook/preview.html"), "<div></div>").unwrap();

        let files = resolve_content_files(&patterns(&[".storybook/*.html"]), root).unwrap();
        assert_eq!(relative(root, &files), [".storybook/preview.html"]);
    }

    #[test]
    fn test_gitignore_respected_when_enabled() {
        let temp_dir = site();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".gitignore"), "templates/sub/\n").unwrap();

        let all = ContentResolver::new().resolve(&patterns(&["./**/*.html"]), root).unwrap();
        assert_eq!(all.len(), 3);

        let filtered = ContentResolver::new()
            .respect_gitignore(true)
            .resolve(&patterns(&["./**/*.html"]), root)
            .unwrap();
        assert_eq!(relative(root, &filtered), ["main/templates/main/home.html", "templates/index.html"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("gone");
        let result = resolve_content_files(&patterns(&["**/*.html"]), &root);
        assert!(matches!(result, Err(ResolveError::RootNotFound { .. })));
    }
}
