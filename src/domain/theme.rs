//! Typed theme map and the built-in default theme.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tokens of one category, e.g. `sans` -> `["Inter", "sans-serif"]`.
pub type TokenMap = BTreeMap<String, Vec<String>>;

/// Resolved design tokens keyed by category, then token name.
///
/// Both levels are ordered so that rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeMap {
    categories: BTreeMap<String, TokenMap>,
}

impl ThemeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one token, returning the value it replaced.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        token: impl Into<String>,
        values: Vec<String>,
    ) -> Option<Vec<String>> {
        self.categories.entry(category.into()).or_default().insert(token.into(), values)
    }

    /// Replace a whole category.
    pub fn set_category(&mut self, category: impl Into<String>, tokens: TokenMap) {
        self.categories.insert(category.into(), tokens);
    }

    pub fn category(&self, category: &str) -> Option<&TokenMap> {
        self.categories.get(category)
    }

    pub fn lookup(&self, category: &str, token: &str) -> Option<&[String]> {
        self.categories.get(category)?.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Additive merge: tokens from `extension` are added to or override the
    /// tokens of the same category; everything else is kept.
    pub fn extended_with(&self, extension: &ThemeMap) -> ThemeMap {
        let mut merged = self.clone();
        if extension.is_empty() {
            return merged;
        }
        for (category, tokens) in &extension.categories {
            let target = merged.categories.entry(category.clone()).or_default();
            for (token, values) in tokens {
                target.insert(token.clone(), values.clone());
            }
        }
        merged
    }

    /// Wholesale merge: every category in `overrides` replaces ours.
    pub fn overridden_by(&self, overrides: &ThemeMap) -> ThemeMap {
        let mut merged = self.clone();
        for (category, tokens) in &overrides.categories {
            merged.categories.insert(category.clone(), tokens.clone());
        }
        merged
    }
}

/// Render a font stack as a CSS `font-family` value.
pub fn font_stack_css(values: &[String]) -> String {
    values.join(", ")
}

const DEFAULT_SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "\"Apple Color Emoji\"",
    "\"Segoe UI Emoji\"",
    "\"Segoe UI Symbol\"",
    "\"Noto Color Emoji\"",
];

const DEFAULT_SERIF: &[&str] =
    &["ui-serif", "Georgia", "Cambria", "\"Times New Roman\"", "Times", "serif"];

const DEFAULT_MONO: &[&str] = &[
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "\"Liberation Mono\"",
    "\"Courier New\"",
    "monospace",
];

/// Built-in default theme.
pub fn default_theme() -> ThemeMap {
    let mut theme = ThemeMap::new();
    let stacks = [("sans", DEFAULT_SANS), ("serif", DEFAULT_SERIF), ("mono", DEFAULT_MONO)];
    for (token, stack) in stacks {
        theme.insert("fontFamily", token, stack.iter().map(|s| s.to_string()).collect());
    }
    theme
}
