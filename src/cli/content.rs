//! Content command implementation

use anyhow::Result;
use clap::Args;
use twconf::{resolve_config, ContentResolver};

use super::utils::ConfigArgs;

#[derive(Args)]
pub struct ContentArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Skip files excluded by .gitignore rules
    #[arg(long)]
    pub gitignore: bool,

    /// Follow symbolic links when expanding patterns
    #[arg(long)]
    pub follow_symlinks: bool,
}

pub fn run(args: ContentArgs) -> Result<()> {
    let (root, config) = args.config.load()?;

    let resolver = ContentResolver::new()
        .respect_gitignore(args.gitignore)
        .follow_symlinks(args.follow_symlinks);

    // Resolving the whole config rejects a malformed theme before any walk.
    let resolved = resolve_config(&config, &root, &resolver)?;

    if resolved.files.is_empty() {
        tracing::warn!("No files matched the content patterns");
    }
    for path in resolved.relative_files() {
        println!("{}", path);
    }

    Ok(())
}
