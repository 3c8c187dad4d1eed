//! twconf: resolve utility-CSS build configurations
//!
//! Loads a declarative configuration (content globs, theme extensions and
//! plugin references), expands the globs against a directory tree and merges
//! the theme extension into the built-in default theme.

pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod resolve;
pub mod theme;
pub mod utils;

pub use config::load_config;
pub use content::{resolve_content_files, ContentResolver};
pub use domain::{default_theme, Config, ThemeMap};
pub use error::ResolveError;
pub use resolve::{resolve_config, ResolvedConfig};
pub use theme::merge_theme;
