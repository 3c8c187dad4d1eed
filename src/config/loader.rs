//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Section name a TOML or YAML file may nest the config under.
const NESTED_SECTION: &str = "tailwind";

const CANDIDATES: &[&str] = &[
    "twconf.json",
    "twconf.toml",
    "twconf.yaml",
    "twconf.yml",
    "tailwind.config.json",
    "tailwind.config.toml",
    "tailwind.config.yaml",
    "tailwind.config.yml",
];

/// Load the config for `root`.
///
/// An explicit `config_path` must parse. Without one, the first known file
/// name found in `root` is used. A discovered file must parse as well; only
/// the absence of any config file falls back to the defaults.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("No config file found in {}, using defaults", root.display());
        return Ok(Config::default());
    };

    let mut cfg = parse_config_file(&config_file)?;
    tracing::debug!("Loaded config from {}", config_file.display());
    cfg.source = Some(config_file);
    Ok(cfg)
}

fn parse_config_file(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "json" => parse_json_config(&content, config_file),
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

fn parse_json_config(content: &str, config_file: &Path) -> Result<Config> {
    serde_json::from_str(content)
        .with_context(|| format!("Invalid JSON config: {}", config_file.display()))
}

/// Parse TOML config, supporting a nested `[tailwind]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `tailwind:` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| root.join(candidate)).find(|path| path.is_file())
}
