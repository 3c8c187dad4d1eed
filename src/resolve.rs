//! One-shot resolution of a loaded configuration.

use crate::content::ContentResolver;
use crate::domain::{default_theme, Config, PluginRef, ThemeMap};
use crate::error::ResolveError;
use crate::theme::resolve_theme;
use crate::utils::display_relative;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Effective configuration handed to the build tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Directory the content patterns were resolved against.
    pub content_root: PathBuf,
    pub files: BTreeSet<PathBuf>,
    pub theme: ThemeMap,
    pub plugins: Vec<PluginRef>,
}

impl ResolvedConfig {
    /// Matched files relative to `content_root`, in sorted order.
    pub fn relative_files(&self) -> Vec<String> {
        self.files.iter().map(|path| display_relative(path, &self.content_root)).collect()
    }
}

/// Directory content patterns are anchored at.
///
/// `relative` content resolves against the config file's directory; anything
/// else resolves against `root`.
pub fn content_root(config: &Config, root: &Path) -> PathBuf {
    match config.source_dir() {
        Some(dir) if config.content.is_relative() && !dir.as_os_str().is_empty() => dir.to_path_buf(),
        Some(_) if config.content.is_relative() => PathBuf::from("."),
        _ => root.to_path_buf(),
    }
}

/// Resolve theme and content of `config`.
///
/// The theme is validated first and all patterns are parsed before any
/// directory is read, so a configuration error never yields a partial result.
pub fn resolve_config(
    config: &Config,
    root: &Path,
    resolver: &ContentResolver,
) -> Result<ResolvedConfig, ResolveError> {
    let theme = resolve_theme(&default_theme(), &config.theme)?;

    let content_root = content_root(config, root);
    let files = resolver.resolve(config.content.patterns(), &content_root)?;

    tracing::info!(
        files = files.len(),
        categories = theme.len(),
        plugins = config.plugins.len(),
        "configuration resolved"
    );

    Ok(ResolvedConfig { content_root, files, theme, plugins: config.plugins.clone() })
}
