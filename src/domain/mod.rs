//! Core domain types: the configuration object and the typed theme map.

mod config;
mod theme;

pub use config::{Config, ContentConfig, PluginRef, RawTheme, ThemeConfig};
pub use theme::{default_theme, font_stack_css, TokenMap, ThemeMap};
