//! Theme command implementation

use anyhow::{Context, Result};
use clap::Args;
use twconf::default_theme;
use twconf::domain::font_stack_css;
use twconf::theme::resolve_theme;

use super::utils::ConfigArgs;

#[derive(Args)]
pub struct ThemeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only print this category (e.g. fontFamily)
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Print the CSS value of this token (e.g. heading)
    #[arg(value_name = "TOKEN", requires = "category")]
    pub token: Option<String>,
}

pub fn run(args: ThemeArgs) -> Result<()> {
    let (_, config) = args.config.load()?;
    let theme = resolve_theme(&default_theme(), &config.theme)?;

    let Some(category) = args.category.as_deref() else {
        println!("{}", serde_json::to_string_pretty(&theme)?);
        return Ok(());
    };

    let tokens = theme
        .category(category)
        .with_context(|| format!("Unknown theme category: {}", category))?;

    match args.token.as_deref() {
        Some(token) => {
            let stack = tokens
                .get(token)
                .with_context(|| format!("Unknown token '{}' in category {}", token, category))?;
            println!("{}", font_stack_css(stack));
        }
        None => println!("{}", serde_json::to_string_pretty(tokens)?),
    }

    Ok(())
}
