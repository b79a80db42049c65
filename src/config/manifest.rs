//! Project manifest (storeart.yaml) parsing.
//!
//! Every key is optional; an empty manifest yields the builtin brand.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};
use crate::types::{Content, SizeSpec};

/// Project manifest loaded from storeart.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Brand name, replaces `content.brand`.
    pub brand: Option<String>,

    /// TrueType/OpenType font. Falls back to the builtin font when unreadable.
    pub font: Option<PathBuf>,

    /// Primary destination root.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Optional second destination root receiving identical files.
    pub mirror: Option<PathBuf>,

    /// Palette overrides as hex strings, keyed by colour name.
    pub palette: BTreeMap<String, String>,

    /// Replacement size catalogs, keyed by builtin catalog name.
    pub catalogs: BTreeMap<String, Vec<SizeSpec>>,

    /// Replacement copy.
    pub content: Option<Content>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            brand: None,
            font: None,
            output: default_output(),
            mirror: None,
            palette: BTreeMap::new(),
            catalogs: BTreeMap::new(),
            content: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a storeart.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty or comment-only document deserializes as null.
        if content.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ArtError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check storeart.yaml syntax".to_string()),
        })
    }

    /// Starter manifest written by `storeart init`.
    pub fn starter(brand: &str) -> String {
        format!(
            r##"# storeart project manifest
brand: {brand}

# Primary output directory, and an optional copy for the app bundle.
output: dist
# mirror: app/assets

# TrueType font for all text. The builtin bitmap font is used when unset
# or unreadable.
# font: /Library/Fonts/Arial.ttf

# Brand colour overrides (see `storeart palette`).
palette:
  primary: "#2E8B57"
  primary-light: "#3CB371"
  accent: "#FF6B35"

# Replace a builtin catalog (see `storeart sizes`).
# catalogs:
#   ios-icons:
#     - {{ width: 1024, height: 1024, label: "1024x1024" }}
"##
        )
    }
}
