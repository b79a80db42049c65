//! Icons command implementation.

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::export::ExportJob;
use crate::output::Printer;
use crate::template::IconTemplate;
use crate::types::BuiltinCatalogs;

use super::generate::{GenerateArgs, Project};

/// Store the icons are generated for
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    All,
    Ios,
    Android,
}

/// Generate iOS and Android app icons
#[derive(Args, Debug, Default)]
pub struct IconsArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Only generate icons for one store
    #[arg(long, value_enum, default_value_t = Platform::All)]
    pub platform: Platform,
}

pub fn run(args: IconsArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.generate, printer)?;
    let template = IconTemplate::new(project.theme());

    let mut jobs = Vec::new();
    if args.platform != Platform::Android {
        jobs.push(ExportJob::ios_icons(&template, project.config.catalog(BuiltinCatalogs::IOS_ICONS)?));
    }
    if args.platform != Platform::Ios {
        jobs.push(ExportJob::android_icons(
            &template,
            project.config.catalog(BuiltinCatalogs::ANDROID_ICONS)?,
        ));
    }

    project.export(&jobs, printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_icons_with_mirror() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(
            &manifest,
            "mirror: mirror\ncatalogs:\n  ios-icons:\n    - { width: 20, height: 20, label: \"20x20\" }\n    - { width: 64, height: 64, label: \"64x64\" }\n",
        )
        .unwrap();

        let args = IconsArgs {
            generate: GenerateArgs {
                config: Some(manifest),
                ..Default::default()
            },
            platform: Platform::Ios,
        };
        run(args, &Printer::new()).unwrap();

        for root in ["dist", "mirror"] {
            let icons = dir.path().join(root).join("ios_icons");
            let img = image::open(icons.join("icon_64x64.png")).unwrap();
            assert_eq!((img.width(), img.height()), (64, 64));
            assert!(icons.join("icon_20x20.png").is_file());
        }
        assert!(!dir.path().join("dist/android_icons").exists());
    }

    #[test]
    fn test_android_icons_only() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(
            &manifest,
            "catalogs:\n  android-icons:\n    - { width: 48, height: 48, label: \"48x48_mdpi\" }\n",
        )
        .unwrap();

        let args = IconsArgs {
            generate: GenerateArgs {
                config: Some(manifest),
                ..Default::default()
            },
            platform: Platform::Android,
        };
        run(args, &Printer::new()).unwrap();

        assert!(dir.path().join("dist/android_icons/ic_launcher_48x48_mdpi.png").is_file());
        assert!(!dir.path().join("dist/ios_icons").exists());
    }
}
