//! Shared CLI utilities.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use twconf::{load_config, Config};

/// Options shared by every subcommand for locating the config.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config file (JSON, TOML or YAML); discovered in the root when omitted
    #[arg(short, long, value_name = "FILE", env = "TWCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root the content patterns are resolved against
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

impl ConfigArgs {
    /// Canonical project root and the config loaded for it.
    pub fn load(&self) -> Result<(PathBuf, Config)> {
        let root = self.root.canonicalize()?;
        if !root.is_dir() {
            anyhow::bail!("Path is not a directory: {}", root.display());
        }
        let config = load_config(&root, self.config.as_deref())?;
        Ok((root, config))
    }
}
