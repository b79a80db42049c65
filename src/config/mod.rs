//! Project configuration.
//!
//! Resolves a `storeart.yaml` manifest (or the builtin defaults when none is
//! present) into the immutable inputs of a run: palette, catalogs, content,
//! font and destination roots.
//!
//! # Example
//!
//! ```ignore
//! use storeart::config::Config;
//!
//! let config = Config::discover(".")?;
//! let icons = config.catalog("ios-icons")?;
//! println!("{} icon sizes", icons.len());
//! ```

mod manifest;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ArtError, Result};
use crate::export::Destination;
use crate::types::{BuiltinCatalogs, Content, Palette, SizeCatalog};

pub use manifest::Manifest;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "storeart.yaml";

/// Effective configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are resolved against.
    pub root: PathBuf,

    /// Manifest path, when one was loaded.
    pub manifest_path: Option<PathBuf>,

    pub palette: Palette,
    pub content: Content,
    pub font: Option<PathBuf>,
    pub output: PathBuf,
    pub mirror: Option<PathBuf>,

    catalogs: BTreeMap<String, SizeCatalog>,
}

impl Config {
    /// Load `storeart.yaml` from `dir` if present, otherwise use defaults.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Self::from_manifest(Manifest::default(), dir, None)
        }
    }

    /// Load an explicit manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = Manifest::load(path)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_manifest(manifest, &root, Some(path.to_path_buf()))
    }

    /// Resolve a parsed manifest.
    pub fn from_manifest(manifest: Manifest, root: &Path, manifest_path: Option<PathBuf>) -> Result<Self> {
        let palette = Palette::brand().with_overrides(&manifest.palette)?;

        let mut content = manifest.content.unwrap_or_default();
        if let Some(brand) = manifest.brand {
            content.brand = brand;
        }
        content.validate()?;

        let mut catalogs: BTreeMap<String, SizeCatalog> = BuiltinCatalogs::all()
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        for (name, sizes) in manifest.catalogs {
            if !catalogs.contains_key(&name) {
                return Err(ArtError::Config {
                    message: format!("Unknown catalog: {}", name),
                    help: Some(format!("Known catalogs: {}", BuiltinCatalogs::NAMES.join(", "))),
                });
            }
            if sizes.is_empty() {
                return Err(ArtError::Config {
                    message: format!("Catalog '{}' has no sizes", name),
                    help: None,
                });
            }
            let catalog = SizeCatalog::new(name.clone(), sizes)?;
            catalogs.insert(name, catalog);
        }

        Ok(Self {
            root: root.to_path_buf(),
            manifest_path,
            palette,
            content,
            font: manifest.font.map(|p| root.join(p)),
            output: root.join(manifest.output),
            mirror: manifest.mirror.map(|p| root.join(p)),
            catalogs,
        })
    }

    /// Whether a manifest file was found.
    pub fn has_manifest(&self) -> bool {
        self.manifest_path.is_some()
    }

    /// Effective catalog by name.
    pub fn catalog(&self, name: &str) -> Result<SizeCatalog> {
        self.catalogs.get(name).cloned().ok_or_else(|| ArtError::Config {
            message: format!("Unknown catalog: {}", name),
            help: Some(format!("Known catalogs: {}", BuiltinCatalogs::NAMES.join(", "))),
        })
    }

    /// All effective catalogs in listing order.
    pub fn catalogs(&self) -> Vec<&SizeCatalog> {
        BuiltinCatalogs::NAMES
            .iter()
            .filter_map(|name| self.catalogs.get(*name))
            .collect()
    }

    /// Primary destination, then the mirror when configured.
    pub fn destinations(&self) -> Vec<Destination> {
        let mut destinations = vec![Destination::new("primary", &self.output)];
        if let Some(mirror) = &self.mirror {
            destinations.push(Destination::new("mirror", mirror));
        }
        destinations
    }

    /// Command-line overrides. Paths are taken as given.
    pub fn with_overrides(mut self, output: Option<PathBuf>, mirror: Option<PathBuf>, font: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if mirror.is_some() {
            self.mirror = mirror;
        }
        if font.is_some() {
            self.font = font;
        }
        self
    }
}
