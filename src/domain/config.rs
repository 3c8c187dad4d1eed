//! Configuration object as declared by the user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Untyped theme categories as read from a config file.
///
/// Values stay loosely typed until the theme is resolved, so that shape errors
/// can be reported with the category and token that caused them.
pub type RawTheme = BTreeMap<String, serde_json::Value>;

/// Top-level build configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns selecting the files to scan for class names.
    pub content: ContentConfig,

    /// Theme overrides and extensions.
    pub theme: ThemeConfig,

    /// Plugin references, handed through untouched.
    pub plugins: Vec<PluginRef>,

    /// File this config was loaded from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Directory containing the loaded config file.
    pub fn source_dir(&self) -> Option<&Path> {
        self.source.as_deref().and_then(Path::parent)
    }
}

/// The `content` key: either a bare pattern list or `{ files, relative }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentConfig {
    Patterns(Vec<String>),
    Detailed {
        files: Vec<String>,
        #[serde(default)]
        relative: bool,
    },
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig::Patterns(Vec::new())
    }
}

impl ContentConfig {
    pub fn patterns(&self) -> &[String] {
        match self {
            ContentConfig::Patterns(patterns) => patterns,
            ContentConfig::Detailed { files, .. } => files,
        }
    }

    /// Whether patterns are anchored at the config file's directory.
    pub fn is_relative(&self) -> bool {
        matches!(self, ContentConfig::Detailed { relative: true, .. })
    }
}

/// The `theme` key.
///
/// Categories set directly under `theme` replace the default category
/// wholesale; categories under `theme.extend` are merged token by token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub extend: RawTheme,

    #[serde(flatten)]
    pub overrides: RawTheme,
}

/// A plugin reference: a bare name or a name with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Name(String),
    WithOptions {
        name: String,
        #[serde(default)]
        options: serde_json::Value,
    },
}

impl PluginRef {
    pub fn name(&self) -> &str {
        match self {
            PluginRef::Name(name) => name,
            PluginRef::WithOptions { name, .. } => name,
        }
    }
}
