//! Export pipeline.
//!
//! Renders every `(SizeSpec, AssetVariant)` pair of each job and writes the
//! result to every destination root. Destination directories are created up
//! front; after that a failed write is recorded and the batch continues.

mod sink;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use sink::{FileSink, ImageSink, TextSink};

use crate::error::{ArtError, Result};
use crate::render::Typeface;
use crate::template::Template;
use crate::types::{AssetVariant, SizeCatalog, SizeSpec};

/// A named output root (primary, mirror).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub root: PathBuf,
}

impl Destination {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

/// File naming convention for a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Naming {
    /// `<prefix>_<label>.png`
    Label { prefix: String },
    /// `<prefix>_<variant>_<w>x<h>.png`, or `<variant>_<w>x<h>.png` without a prefix.
    Variant { prefix: Option<String> },
}

impl Naming {
    pub fn file_name(&self, size: &SizeSpec, variant: &AssetVariant) -> String {
        match self {
            Naming::Label { prefix } => format!("{}_{}.png", prefix, size.label),
            Naming::Variant { prefix: Some(prefix) } => format!(
                "{}_{}_{}x{}.png",
                prefix,
                variant.id(),
                size.width,
                size.height
            ),
            Naming::Variant { prefix: None } => {
                format!("{}_{}x{}.png", variant.id(), size.width, size.height)
            }
        }
    }
}

/// Directory layout below a job's sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// All files side by side.
    Flat,
    /// One directory per size, named by its label.
    PerSize,
}

/// One generator run: a template over a catalog and a list of variants.
pub struct ExportJob<'a> {
    pub name: String,
    pub template: &'a dyn Template,
    pub catalog: SizeCatalog,
    pub variants: Vec<AssetVariant>,
    /// Sub-directory below each destination root.
    pub dir: PathBuf,
    pub naming: Naming,
    pub grouping: Grouping,
}

impl<'a> ExportJob<'a> {
    /// `ios_icons/icon_<label>.png`
    pub fn ios_icons(template: &'a dyn Template, catalog: SizeCatalog) -> Self {
        Self {
            name: "ios-icons".to_string(),
            template,
            catalog,
            variants: vec![AssetVariant::Icon],
            dir: PathBuf::from("ios_icons"),
            naming: Naming::Label {
                prefix: "icon".to_string(),
            },
            grouping: Grouping::Flat,
        }
    }

    /// `android_icons/ic_launcher_<label>.png`
    pub fn android_icons(template: &'a dyn Template, catalog: SizeCatalog) -> Self {
        Self {
            name: "android-icons".to_string(),
            dir: PathBuf::from("android_icons"),
            naming: Naming::Label {
                prefix: "ic_launcher".to_string(),
            },
            ..Self::ios_icons(template, catalog)
        }
    }

    /// `screenshots/<label>/screenshot_<n>_<w>x<h>.png`
    pub fn screenshots(template: &'a dyn Template, catalog: SizeCatalog, screens: Vec<u32>) -> Self {
        Self {
            name: "screenshots".to_string(),
            template,
            catalog,
            variants: AssetVariant::screens(screens),
            dir: PathBuf::from("screenshots"),
            naming: Naming::Variant {
                prefix: Some("screenshot".to_string()),
            },
            grouping: Grouping::PerSize,
        }
    }

    /// `realistic_screenshots/<label>/<screen id>_<w>x<h>.png`
    pub fn realistic(template: &'a dyn Template, catalog: SizeCatalog) -> Self {
        Self {
            name: "realistic".to_string(),
            template,
            catalog,
            variants: AssetVariant::realistic(),
            dir: PathBuf::from("realistic_screenshots"),
            naming: Naming::Variant { prefix: None },
            grouping: Grouping::PerSize,
        }
    }

    /// `feature_graphic/feature_graphic_<label>.png`
    pub fn feature_graphic(template: &'a dyn Template, catalog: SizeCatalog) -> Self {
        Self {
            name: "feature-graphic".to_string(),
            template,
            catalog,
            variants: vec![AssetVariant::FeatureGraphic],
            dir: PathBuf::from("feature_graphic"),
            naming: Naming::Label {
                prefix: "feature_graphic".to_string(),
            },
            grouping: Grouping::Flat,
        }
    }

    /// Number of images this job renders.
    pub fn units(&self) -> usize {
        self.catalog.len() * self.variants.len()
    }

    /// Path of one output relative to a destination root.
    pub fn relative_path(&self, size: &SizeSpec, variant: &AssetVariant) -> PathBuf {
        self.size_dir(size).join(self.naming.file_name(size, variant))
    }

    fn size_dir(&self, size: &SizeSpec) -> PathBuf {
        match self.grouping {
            Grouping::Flat => self.dir.clone(),
            Grouping::PerSize => self.dir.join(&size.label),
        }
    }
}

impl fmt::Debug for ExportJob<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportJob")
            .field("name", &self.name)
            .field("template", &self.template.name())
            .field("catalog", &self.catalog.name)
            .field("variants", &self.variants)
            .field("dir", &self.dir)
            .finish()
    }
}

/// Pipeline events, in order, for operator feedback.
#[derive(Debug)]
pub enum Event<'e> {
    /// A unit is about to be rendered.
    Rendering {
        current: usize,
        total: usize,
        job: &'e str,
        size: &'e SizeSpec,
        variant: &'e AssetVariant,
    },
    /// A file was written.
    Wrote { path: &'e Path },
    /// A unit could not be written to one destination.
    Failed { failure: &'e ExportFailure },
}

/// A unit that was not written to a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub job: String,
    pub destination: String,
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Outcome of a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Units rendered (each written to every destination).
    pub units: usize,
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn recorded failures into an error for the caller's exit status.
    pub fn into_result(self) -> Result<Self> {
        if self.failures.is_empty() {
            return Ok(self);
        }
        Err(ArtError::Export {
            message: format!(
                "{} of {} file(s) could not be written",
                self.failures.len(),
                self.failures.len() + self.written.len()
            ),
            help: self.failures.first().map(|f| f.to_string()),
        })
    }
}

/// Drives jobs through templates into sinks.
pub struct Exporter<'a> {
    destinations: Vec<Destination>,
    typeface: &'a Typeface,
    sink: &'a dyn ImageSink,
}

impl<'a> Exporter<'a> {
    pub fn new(destinations: Vec<Destination>, typeface: &'a Typeface, sink: &'a dyn ImageSink) -> Self {
        Self {
            destinations,
            typeface,
            sink,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Create every destination root. Any failure is fatal.
    ///
    /// Job and size directories are created as each unit is written, so a
    /// blocked sub-directory only fails the units below it.
    pub fn prepare(&self) -> Result<()> {
        for destination in &self.destinations {
            create_dir(&destination.root)?;
        }
        Ok(())
    }

    /// Prepare destinations, then render and write every unit.
    pub fn run(&self, jobs: &[ExportJob], mut observe: impl FnMut(Event)) -> Result<ExportReport> {
        self.prepare()?;

        let total: usize = jobs.iter().map(|j| j.units()).sum();
        let mut report = ExportReport::default();
        let mut current = 0;

        for job in jobs {
            for size in job.catalog.iter() {
                for variant in &job.variants {
                    current += 1;
                    observe(Event::Rendering {
                        current,
                        total,
                        job: &job.name,
                        size,
                        variant,
                    });
                    report.units += 1;
                    self.unit(job, size, variant, &mut report, &mut observe);
                }
            }
        }
        Ok(report)
    }

    fn unit(
        &self,
        job: &ExportJob,
        size: &SizeSpec,
        variant: &AssetVariant,
        report: &mut ExportReport,
        observe: &mut impl FnMut(Event),
    ) {
        let relative = job.relative_path(size, variant);
        let rendered = job
            .template
            .render(size, variant, self.typeface)
            .and_then(|image| {
                if image.dimensions() == size.dimensions() {
                    Ok(image)
                } else {
                    let (w, h) = image.dimensions();
                    Err(ArtError::Render {
                        message: format!("Rendered {}x{} for {}", w, h, size),
                        help: None,
                    })
                }
            });

        for destination in &self.destinations {
            let path = destination.root.join(&relative);
            let outcome = match &rendered {
                Ok(image) => path
                    .parent()
                    .map_or(Ok(()), create_dir)
                    .and_then(|()| self.sink.write_image(image, &path))
                    .map_err(|e| failure_message(&e)),
                Err(e) => Err(failure_message(e)),
            };
            match outcome {
                Ok(()) => {
                    observe(Event::Wrote { path: &path });
                    report.written.push(path);
                }
                Err(message) => {
                    let failure = ExportFailure {
                        job: job.name.clone(),
                        destination: destination.name.clone(),
                        path,
                        message,
                    };
                    observe(Event::Failed { failure: &failure });
                    report.failures.push(failure);
                }
            }
        }
    }
}

/// Failures are displayed next to their path, so drop it from IO errors.
fn failure_message(error: &ArtError) -> String {
    match error {
        ArtError::Io { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
