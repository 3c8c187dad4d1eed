//! Configuration loading
//!
//! Handles discovering and parsing config files (JSON, TOML, YAML), falling
//! back to defaults when no file is present.

pub mod loader;

pub use loader::load_config;
