//! Realistic command implementation.

use clap::Args;

use crate::error::Result;
use crate::export::ExportJob;
use crate::output::Printer;
use crate::template::RealisticTemplate;
use crate::types::BuiltinCatalogs;

use super::generate::{GenerateArgs, Project};

/// Generate the realistic mock app screens
#[derive(Args, Debug, Default)]
pub struct RealisticArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn run(args: RealisticArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.generate, printer)?;
    let template = RealisticTemplate::new(project.theme());
    let jobs = [ExportJob::realistic(
        &template,
        project.config.catalog(BuiltinCatalogs::REALISTIC)?,
    )];

    project.export(&jobs, printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RealisticScreen;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_realistic_writes_every_screen() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(
            &manifest,
            "catalogs:\n  realistic:\n    - { width: 215, height: 466, label: \"Phone_Portrait\" }\n",
        )
        .unwrap();

        let args = RealisticArgs {
            generate: GenerateArgs {
                config: Some(manifest),
                ..Default::default()
            },
        };
        run(args, &Printer::new()).unwrap();

        let device = dir.path().join("dist/realistic_screenshots/Phone_Portrait");
        for screen in RealisticScreen::ALL {
            let path = device.join(format!("{}_215x466.png", screen.id()));
            let img = image::open(&path).unwrap();
            assert_eq!((img.width(), img.height()), (215, 466));
        }
    }
}
