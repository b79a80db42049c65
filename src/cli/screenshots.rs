//! Screenshots command implementation.

use clap::Args;

use crate::error::{ArtError, Result};
use crate::export::ExportJob;
use crate::output::Printer;
use crate::template::ScreenshotTemplate;
use crate::types::BuiltinCatalogs;

use super::generate::{GenerateArgs, Project};

/// Generate marketing screenshots for every device size
#[derive(Args, Debug, Default)]
pub struct ScreenshotsArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Only render these screen numbers (default: all)
    #[arg(long, value_delimiter = ',')]
    pub screens: Vec<u32>,
}

pub fn run(args: ScreenshotsArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.generate, printer)?;
    let screens = select_screens(project.config.content.screen_numbers(), &args.screens)?;
    let template = ScreenshotTemplate::new(project.theme());
    let jobs = [ExportJob::screenshots(
        &template,
        project.config.catalog(BuiltinCatalogs::SCREENSHOTS)?,
        screens,
    )];

    project.export(&jobs, printer)?;
    Ok(())
}

/// Requested screens in content order; every request must exist.
pub(crate) fn select_screens(available: Vec<u32>, requested: &[u32]) -> Result<Vec<u32>> {
    if requested.is_empty() {
        return Ok(available);
    }
    if let Some(missing) = requested.iter().find(|n| !available.contains(n)) {
        return Err(ArtError::Config {
            message: format!("No copy for screen {}", missing),
            help: Some(format!(
                "Available screens: {}",
                available.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
            )),
        });
    }
    Ok(available.into_iter().filter(|n| requested.contains(n)).collect())
}
