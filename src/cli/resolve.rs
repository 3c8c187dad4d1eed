//! Resolve command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use twconf::{resolve_config, ContentResolver};

use super::utils::ConfigArgs;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Skip files excluded by .gitignore rules
    #[arg(long)]
    pub gitignore: bool,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let (root, config) = args.config.load()?;
    let resolver = ContentResolver::new().respect_gitignore(args.gitignore);

    let resolved = resolve_config(&config, &root, &resolver)?;

    let output = json!({
        "config": config.source.as_ref().map(|p| p.display().to_string()),
        "contentRoot": resolved.content_root.display().to_string(),
        "files": resolved.relative_files(),
        "theme": resolved.theme,
        "plugins": resolved.plugins,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
