//! twconf: inspect how a utility-CSS build configuration resolves
//!
//! Prints the files selected by the content globs and the theme produced by
//! merging the configured extensions into the default theme.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
