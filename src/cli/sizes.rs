//! Sizes command implementation.
//!
//! Lists the effective size catalogs.

use clap::Args;

use crate::error::{ArtError, Result};
use crate::output::{plural, Printer};
use crate::types::SizeCatalog;

use super::generate::GenerateArgs;

/// List the size catalogs assets are generated for
#[derive(Args, Debug, Default)]
pub struct SizesArgs {
    /// Only list this catalog
    pub catalog: Option<String>,

    /// Print JSON to stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn run(args: SizesArgs, printer: &Printer) -> Result<()> {
    let project = super::generate::Project::load(&args.generate, printer)?;
    let catalogs: Vec<SizeCatalog> = match &args.catalog {
        Some(name) => vec![project.config.catalog(name)?],
        None => project.config.catalogs().into_iter().cloned().collect(),
    };

    if args.json {
        println!("{}", to_json(&catalogs)?);
        return Ok(());
    }

    for catalog in &catalogs {
        printer.info(&catalog.name, &plural(catalog.len(), "size", "sizes"));
        for size in catalog.iter() {
            println!("{:>6} x {:<6} {}", size.width, size.height, size.label);
        }
    }
    Ok(())
}

fn to_json(catalogs: &[SizeCatalog]) -> Result<String> {
    serde_json::to_string_pretty(catalogs).map_err(|e| ArtError::Export {
        message: format!("Failed to serialize catalogs: {}", e),
        help: None,
    })
}
