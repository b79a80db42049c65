//! All command implementation.
//!
//! Runs every generator in one batch so progress and failures are counted
//! across the full asset set.

use clap::Args;

use crate::error::Result;
use crate::export::ExportJob;
use crate::output::Printer;
use crate::template::{FeatureGraphicTemplate, IconTemplate, RealisticTemplate, ScreenshotTemplate};
use crate::types::BuiltinCatalogs;

use super::generate::{GenerateArgs, Project};

/// Generate icons, screenshots, realistic screens and the feature graphic
#[derive(Args, Debug, Default)]
pub struct AllArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn run(args: AllArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.generate, printer)?;
    let config = &project.config;
    let theme = project.theme();

    let icon = IconTemplate::new(theme);
    let screenshot = ScreenshotTemplate::new(theme);
    let realistic = RealisticTemplate::new(theme);
    let feature = FeatureGraphicTemplate::new(theme);

    let jobs = [
        ExportJob::ios_icons(&icon, config.catalog(BuiltinCatalogs::IOS_ICONS)?),
        ExportJob::android_icons(&icon, config.catalog(BuiltinCatalogs::ANDROID_ICONS)?),
        ExportJob::screenshots(
            &screenshot,
            config.catalog(BuiltinCatalogs::SCREENSHOTS)?,
            config.content.screen_numbers(),
        ),
        ExportJob::realistic(&realistic, config.catalog(BuiltinCatalogs::REALISTIC)?),
        ExportJob::feature_graphic(&feature, config.catalog(BuiltinCatalogs::FEATURE_GRAPHIC)?),
    ];

    project.export(&jobs, printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SMALL_CATALOGS: &str = r#"
catalogs:
  ios-icons:
    - { width: 20, height: 20, label: "20x20" }
  android-icons:
    - { width: 36, height: 36, label: "36x36_ldpi" }
  screenshots:
    - { width: 66, height: 143, label: "Phone" }
  realistic:
    - { width: 86, height: 186, label: "Phone" }
  feature-graphic:
    - { width: 102, height: 50, label: "102x50" }
"#;

    fn count_files(dir: &std::path::Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .map(|p| if p.is_dir() { count_files(&p) } else { 1 })
            .sum()
    }

    #[test]
    fn test_all_writes_full_tree() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(&manifest, SMALL_CATALOGS).unwrap();

        let args = AllArgs {
            generate: GenerateArgs {
                config: Some(manifest),
                mirror: Some(dir.path().join("mirror")),
                ..Default::default()
            },
        };
        run(args, &Printer::new()).unwrap();

        // 1 + 1 icons, 5 screenshots, 5 realistic screens, 1 feature graphic.
        for root in ["dist", "mirror"] {
            let root = dir.path().join(root);
            assert_eq!(count_files(&root), 13);
            assert!(root.join("ios_icons/icon_20x20.png").is_file());
            assert!(root.join("android_icons/ic_launcher_36x36_ldpi.png").is_file());
            assert!(root.join("screenshots/Phone/screenshot_5_66x143.png").is_file());
            assert!(root.join("realistic_screenshots/Phone/05_ghana_card_verification_86x186.png").is_file());
            assert!(root.join("feature_graphic/feature_graphic_102x50.png").is_file());
        }
    }

    #[test]
    fn test_uncreatable_output_is_fatal() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(&manifest, SMALL_CATALOGS).unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let args = AllArgs {
            generate: GenerateArgs {
                config: Some(manifest),
                output: Some(blocker.join("dist")),
                ..Default::default()
            },
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(crate::error::ArtError::Io { .. })
        ));
    }
}
