//! Init command implementation.
//!
//! Writes a starter `storeart.yaml` manifest.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{ArtError, Result};
use crate::export::{FileSink, TextSink};
use crate::output::{display_path, Printer};
use crate::types::Content;

/// Initialize a storeart project (generates storeart.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Brand name written into the manifest
    #[arg(long)]
    pub brand: Option<String>,

    /// Overwrite existing storeart.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    write_manifest(args, &FileSink, printer)
}

fn write_manifest(args: InitArgs, sink: &dyn TextSink, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(ArtError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let brand = args.brand.unwrap_or_else(|| Content::default().brand);
    sink.write_text(&Manifest::starter(&brand), &manifest_path)?;

    printer.success("Created", &display_path(&manifest_path));
    Ok(())
}
