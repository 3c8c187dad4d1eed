//! Content pattern compilation.
//!
//! A pattern is split into a literal base directory and a glob remainder so
//! that only the relevant part of the tree is walked: `./templates/**/*.html`
//! walks `templates/` and matches `**/*.html` below it.

use crate::error::ResolveError;
use crate::utils::normalize_path;
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Component, Path, PathBuf};

/// A parsed content pattern, anchored at a root directory.
#[derive(Debug, Clone)]
pub struct ContentPattern {
    /// Pattern as written in the config.
    pub raw: String,
    /// `!`-prefixed patterns remove files instead of adding them.
    pub negated: bool,
    /// Literal directory prefix joined onto the root.
    pub base: PathBuf,
    /// Matcher for the remainder, `None` when the whole pattern is literal.
    matcher: Option<GlobMatcher>,
    /// Walk depth limit when the remainder has no `**`.
    max_depth: Option<usize>,
}

impl ContentPattern {
    /// Parse `raw` relative to `root`.
    pub fn parse(raw: &str, root: &Path) -> Result<Self, ResolveError> {
        let (negated, body) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let segments: Vec<&str> = body.split('/').collect();
        let literal_len = segments.iter().take_while(|seg| !has_glob_meta(seg)).count();

        let mut base = root.to_path_buf();
        for seg in &segments[..literal_len] {
            match *seg {
                "" | "." => {}
                ".." if matches!(base.components().next_back(), Some(Component::Normal(_))) => {
                    base.pop();
                }
                other => base.push(other),
            }
        }

        let rest = segments[literal_len..].join("/");
        let (matcher, max_depth) = if rest.is_empty() {
            (None, None)
        } else {
            let glob = GlobBuilder::new(&rest)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|source| ResolveError::InvalidPattern { pattern: raw.to_string(), source })?;
            let max_depth = if rest.contains("**") { None } else { Some(segments.len() - literal_len) };
            (Some(glob.compile_matcher()), max_depth)
        };

        Ok(Self { raw: raw.to_string(), negated, base, matcher, max_depth })
    }

    /// A pattern with no wildcards names a single file.
    pub fn is_literal(&self) -> bool {
        self.matcher.is_none()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether `path` (rooted like `base`) is selected by this pattern.
    pub fn matches(&self, path: &Path) -> bool {
        match &self.matcher {
            None => path == self.base.as_path(),
            Some(matcher) => {
                let Some(rel) = path.strip_prefix(&self.base).ok().and_then(Path::to_str) else {
                    return false;
                };
                if cfg!(windows) {
                    matcher.is_match(normalize_path(rel))
                } else {
                    matcher.is_match(rel)
                }
            }
        }
    }
}

/// Parse every pattern, failing on the first malformed one.
pub fn compile_patterns(patterns: &[String], root: &Path) -> Result<Vec<ContentPattern>, ResolveError> {
    patterns.iter().map(|raw| ContentPattern::parse(raw, root)).collect()
}

fn has_glob_meta(segment: &str) -> bool {
    segment.contains(['*', '?', '[', ']', '{', '}', '\\'])
}
