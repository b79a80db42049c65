//! Shared plumbing for the generator commands.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::export::{Event, ExportJob, ExportReport, Exporter, FileSink};
use crate::output::{display_path, plural, progress, Printer};
use crate::render::{FontFallback, FontResolver, Typeface};
use crate::template::Theme;

/// Options common to every generator command
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Manifest to use instead of ./storeart.yaml
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Primary output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write every file below this directory
    #[arg(long)]
    pub mirror: Option<PathBuf>,

    /// TrueType/OpenType font for all text
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Show every written file and font fallbacks
    #[arg(long, short)]
    pub verbose: bool,
}

/// Resolved inputs for one generator run.
pub struct Project {
    pub config: Config,
    pub typeface: Typeface,
}

impl Project {
    pub fn load(args: &GenerateArgs, printer: &Printer) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::discover(".")?,
        }
        .with_overrides(args.output.clone(), args.mirror.clone(), args.font.clone());

        if let Some(path) = &config.manifest_path {
            printer.verbose("Loaded", &display_path(path));
        }

        let fallback: Rc<RefCell<Option<FontFallback>>> = Rc::default();
        let seen = Rc::clone(&fallback);
        let typeface = FontResolver::new(config.font.clone())
            .on_fallback(move |f| *seen.borrow_mut() = Some(f.clone()))
            .resolve();
        if let Some(f) = fallback.borrow().as_ref() {
            printer.verbose("Warning", &format!("using builtin font, {}", f));
        }

        Ok(Self { config, typeface })
    }

    pub fn theme(&self) -> Theme<'_> {
        Theme::new(&self.config.palette, &self.config.content)
    }

    /// Run jobs against every configured destination, reporting progress.
    ///
    /// Returns an `Export` error when any file could not be written.
    pub fn export(&self, jobs: &[ExportJob], printer: &Printer) -> Result<ExportReport> {
        let destinations = self.config.destinations();
        for destination in &destinations {
            printer.info("Writing", &format!("{} ({})", display_path(&destination.root), destination.name));
        }

        let exporter = Exporter::new(destinations, &self.typeface, &FileSink);
        let report = exporter.run(jobs, |event| match event {
            Event::Rendering {
                current,
                total,
                job,
                size,
                variant,
            } => printer.status(
                "Rendering",
                &format!("{} {} {} {}", printer.dim(&progress(current, total)), job, variant, size),
            ),
            Event::Wrote { path } => printer.verbose("Wrote", &display_path(path)),
            Event::Failed { failure } => printer.error("Failed", &failure.to_string()),
        })?;

        let summary = format!(
            "{} from {}",
            plural(report.written.len(), "file", "files"),
            plural(report.units, "render", "renders")
        );
        if report.is_success() {
            printer.success("Finished", &summary);
        } else {
            printer.warning(
                "Finished",
                &format!("{}, {} failed", summary, report.failures.len()),
            );
        }
        report.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuiltinCatalogs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_project_with_missing_font_falls_back() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(&manifest, "font: missing.ttf\n").unwrap();
        let args = GenerateArgs {
            config: Some(manifest),
            verbose: true,
            ..Default::default()
        };

        let project = Project::load(&args, &Printer::new().with_verbose(true)).unwrap();

        assert!(project.typeface.is_builtin());
        assert_eq!(project.config.output, dir.path().join("dist"));
    }

    #[test]
    fn test_output_flag_overrides_manifest() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(&manifest, "output: from-manifest\n").unwrap();
        let args = GenerateArgs {
            config: Some(manifest),
            output: Some(dir.path().join("from-flag")),
            ..Default::default()
        };

        let project = Project::load(&args, &Printer::new()).unwrap();
        assert_eq!(project.config.output, dir.path().join("from-flag"));
    }

    #[test]
    fn test_export_failure_is_an_error() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("storeart.yaml");
        fs::write(
            &manifest,
            "catalogs:\n  feature-graphic:\n    - { width: 64, height: 32, label: \"64x32\" }\n",
        )
        .unwrap();
        // Block the target file with a directory.
        fs::create_dir_all(dir.path().join("dist/feature_graphic/feature_graphic_64x32.png")).unwrap();

        let project = Project::load(
            &GenerateArgs {
                config: Some(manifest),
                ..Default::default()
            },
            &Printer::new(),
        )
        .unwrap();
        let template = crate::template::FeatureGraphicTemplate::new(project.theme());
        let catalog = project.config.catalog(BuiltinCatalogs::FEATURE_GRAPHIC).unwrap();
        let jobs = [ExportJob::feature_graphic(&template, catalog)];

        let err = project.export(&jobs, &Printer::new()).unwrap_err();
        assert!(matches!(err, crate::error::ArtError::Export { .. }));
    }
}
