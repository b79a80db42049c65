pub mod all;
pub mod completions;
pub mod feature_graphic;
pub mod generate;
pub mod icons;
pub mod init;
pub mod palette;
pub mod realistic;
pub mod screenshots;
pub mod sizes;

use clap::{Parser, Subcommand};

/// storeart - Branded app-store asset generator
#[derive(Parser, Debug)]
#[command(name = "storeart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate iOS and Android app icons
    Icons(icons::IconsArgs),

    /// Generate marketing screenshots
    Screenshots(screenshots::ScreenshotsArgs),

    /// Generate realistic mock app screens
    Realistic(realistic::RealisticArgs),

    /// Generate the Play Store feature graphic
    FeatureGraphic(feature_graphic::FeatureGraphicArgs),

    /// Generate every asset
    All(all::AllArgs),

    /// Initialize a storeart project (generates storeart.yaml)
    Init(init::InitArgs),

    /// List size catalogs
    Sizes(sizes::SizesArgs),

    /// Show the effective brand palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Commands {
    /// Whether `--verbose` was passed.
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Icons(a) => a.generate.verbose,
            Commands::Screenshots(a) => a.generate.verbose,
            Commands::Realistic(a) => a.generate.verbose,
            Commands::FeatureGraphic(a) => a.generate.verbose,
            Commands::All(a) => a.generate.verbose,
            Commands::Sizes(a) => a.generate.verbose,
            Commands::Palette(a) => a.generate.verbose,
            Commands::Init(_) | Commands::Completions(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generators_need_no_flags() {
        for name in ["icons", "screenshots", "realistic", "feature-graphic", "all"] {
            assert!(Cli::try_parse_from(["storeart", name]).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "storeart",
            "all",
            "--output",
            "out",
            "--mirror",
            "app/assets",
            "--font",
            "Inter.ttf",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.command.verbose());
        let Commands::All(args) = cli.command else {
            panic!("expected all");
        };
        assert_eq!(args.generate.output, Some(PathBuf::from("out")));
        assert_eq!(args.generate.mirror, Some(PathBuf::from("app/assets")));
        assert_eq!(args.generate.font, Some(PathBuf::from("Inter.ttf")));
    }

    #[test]
    fn test_screens_list() {
        let cli = Cli::try_parse_from(["storeart", "screenshots", "--screens", "1,3"]).unwrap();
        let Commands::Screenshots(args) = cli.command else {
            panic!("expected screenshots");
        };
        assert_eq!(args.screens, vec![1, 3]);
    }
}
