//! Feature graphic command implementation.

use clap::Args;

use crate::error::Result;
use crate::export::ExportJob;
use crate::output::Printer;
use crate::template::FeatureGraphicTemplate;
use crate::types::BuiltinCatalogs;

use super::generate::{GenerateArgs, Project};

/// Generate the Play Store feature graphic
#[derive(Args, Debug, Default)]
pub struct FeatureGraphicArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn run(args: FeatureGraphicArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.generate, printer)?;
    let template = FeatureGraphicTemplate::new(project.theme());
    let jobs = [ExportJob::feature_graphic(
        &template,
        project.config.catalog(BuiltinCatalogs::FEATURE_GRAPHIC)?,
    )];

    project.export(&jobs, printer)?;
    Ok(())
}
