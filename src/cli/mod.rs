//! Command-line interface for twconf
//!
//! `content`, `theme` and `resolve` all load the same config (see
//! [`utils::ConfigArgs`]) and differ only in what they print.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod content;
mod resolve;
mod theme;
mod utils;

/// Resolve utility-CSS build configurations
#[derive(Parser)]
#[command(name = "twconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the files selected by the content patterns
    Content(content::ContentArgs),

    /// Print the merged theme, or the CSS value of a single token
    Theme(theme::ThemeArgs),

    /// Print the fully resolved configuration as JSON
    Resolve(resolve::ResolveArgs),
}

impl Commands {
    fn run(self) -> Result<()> {
        match self {
            Commands::Content(args) => content::run(args),
            Commands::Theme(args) => theme::run(args),
            Commands::Resolve(args) => resolve::run(args),
        }
    }
}

/// Log to stderr so stdout stays machine-readable.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output for
/// this crate only and everything else stays at warnings.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,twconf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose))
        .with(filter)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.command.run()
}
