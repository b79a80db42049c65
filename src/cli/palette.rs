//! Palette command implementation.
//!
//! Prints the effective brand palette, one `name: #hex` line per colour.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Palette;

use super::generate::{GenerateArgs, Project};

/// Show the effective brand palette
#[derive(Args, Debug, Default)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.generate, printer)?;
    let palette = &project.config.palette;

    printer.info("Palette", &plural(palette.len(), "colour", "colours"));
    for line in lines(palette) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(palette: &Palette) -> Vec<String> {
    palette.iter().map(|(name, colour)| format!("{}: {}", name, colour)).collect()
}
