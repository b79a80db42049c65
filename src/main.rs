use clap::Parser;
use miette::Result;
use storeart::cli::{Cli, Commands};
use storeart::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.command.verbose());

    match cli.command {
        Commands::Icons(args) => storeart::cli::icons::run(args, &printer)?,
        Commands::Screenshots(args) => storeart::cli::screenshots::run(args, &printer)?,
        Commands::Realistic(args) => storeart::cli::realistic::run(args, &printer)?,
        Commands::FeatureGraphic(args) => storeart::cli::feature_graphic::run(args, &printer)?,
        Commands::All(args) => storeart::cli::all::run(args, &printer)?,
        Commands::Init(args) => storeart::cli::init::run(args, &printer)?,
        Commands::Sizes(args) => storeart::cli::sizes::run(args, &printer)?,
        Commands::Palette(args) => storeart::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => storeart::cli::completions::run(args)?,
    }

    Ok(())
}
