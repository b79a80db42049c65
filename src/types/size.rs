//! Size specs and the builtin store catalogs.
//!
//! A catalog is an ordered list of `(width, height, label)` triples. Order
//! only controls processing order; labels end up in output file names.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// One required output dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    pub label: String,
}

impl SizeSpec {
    pub fn new(width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            width,
            height,
            label: label.into(),
        }
    }

    /// A square spec (icons).
    pub fn square(size: u32, label: impl Into<String>) -> Self {
        Self::new(size, size, label)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The shorter side.
    pub fn short_side(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Tablet layouts get wider margins and larger type.
    pub fn is_tablet(&self) -> bool {
        self.label.contains("iPad")
    }

    fn validate(&self, catalog: &str) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ArtError::Config {
                message: format!(
                    "Size '{}' in catalog '{}' has a zero dimension ({}x{})",
                    self.label, catalog, self.width, self.height
                ),
                help: Some("Width and height must both be positive".to_string()),
            });
        }
        let label = self.label.trim();
        if label.is_empty() || label == "." || label == ".." || label.contains(['/', '\\']) {
            return Err(ArtError::Config {
                message: format!("Invalid size label '{}' in catalog '{}'", self.label, catalog),
                help: Some(
                    "Labels become file names; use a non-empty name other than '.' or '..' without path separators"
                        .to_string(),
                ),
            });
        }
        Ok(())
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.label, self.width, self.height)
    }
}

/// Named, ordered collection of size specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeCatalog {
    pub name: String,
    pub sizes: Vec<SizeSpec>,
}

impl SizeCatalog {
    /// Create a catalog, rejecting zero-sized, unnamed or duplicate-label specs.
    pub fn new(name: impl Into<String>, sizes: Vec<SizeSpec>) -> Result<Self> {
        let name = name.into();
        let mut labels = HashSet::new();
        for spec in &sizes {
            spec.validate(&name)?;
            if !labels.insert(spec.label.as_str()) {
                return Err(ArtError::Config {
                    message: format!("Duplicate size label '{}' in catalog '{}'", spec.label, name),
                    help: Some("Labels become file names and must be unique within a catalog".to_string()),
                });
            }
        }
        Ok(Self { name, sizes })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SizeSpec> {
        self.sizes.iter()
    }
}

/// Collection of builtin catalogs.
pub struct BuiltinCatalogs;

impl BuiltinCatalogs {
    pub const IOS_ICONS: &'static str = "ios-icons";
    pub const ANDROID_ICONS: &'static str = "android-icons";
    pub const SCREENSHOTS: &'static str = "screenshots";
    pub const REALISTIC: &'static str = "realistic";
    pub const FEATURE_GRAPHIC: &'static str = "feature-graphic";

    /// Every builtin catalog name, in listing order.
    pub const NAMES: [&'static str; 5] = [
        Self::IOS_ICONS,
        Self::ANDROID_ICONS,
        Self::SCREENSHOTS,
        Self::REALISTIC,
        Self::FEATURE_GRAPHIC,
    ];

    /// App Store icon sizes.
    fn ios_icons() -> Vec<SizeSpec> {
        [20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024]
            .into_iter()
            .map(|n| SizeSpec::square(n, format!("{n}x{n}")))
            .collect()
    }

    /// Launcher icon densities plus the Play Store listing icon.
    fn android_icons() -> Vec<SizeSpec> {
        [
            (36, "ldpi"),
            (48, "mdpi"),
            (72, "hdpi"),
            (96, "xhdpi"),
            (144, "xxhdpi"),
            (192, "xxxhdpi"),
            (512, "playstore"),
        ]
        .into_iter()
        .map(|(n, density)| SizeSpec::square(n, format!("{n}x{n}_{density}")))
        .collect()
    }

    /// Store screenshot sizes, portrait and landscape.
    fn screenshots() -> Vec<SizeSpec> {
        vec![
            SizeSpec::new(1320, 2868, "iPhone_Pro_Max_Portrait"),
            SizeSpec::new(2868, 1320, "iPhone_Pro_Max_Landscape"),
            SizeSpec::new(1290, 2796, "iPhone_Pro_Portrait"),
            SizeSpec::new(2796, 1290, "iPhone_Pro_Landscape"),
            SizeSpec::new(2064, 2752, "iPad_12_9_Portrait"),
            SizeSpec::new(2752, 2064, "iPad_12_9_Landscape"),
            SizeSpec::new(2048, 2732, "iPad_Pro_Portrait"),
            SizeSpec::new(2732, 2048, "iPad_Pro_Landscape"),
        ]
    }

    /// Portrait-only sizes for the realistic mock screens.
    fn realistic() -> Vec<SizeSpec> {
        vec![
            SizeSpec::new(1320, 2868, "iPhone_Pro_Max_Portrait"),
            SizeSpec::new(1290, 2796, "iPhone_Pro_Portrait"),
            SizeSpec::new(2064, 2752, "iPad_12_9_Portrait"),
            SizeSpec::new(2048, 2732, "iPad_Pro_Portrait"),
        ]
    }

    /// Play Store feature graphic.
    fn feature_graphic() -> Vec<SizeSpec> {
        vec![SizeSpec::new(1024, 500, "1024x500")]
    }

    /// Get a builtin catalog by name.
    pub fn get(name: &str) -> Option<SizeCatalog> {
        let sizes = match name {
            Self::IOS_ICONS => Self::ios_icons(),
            Self::ANDROID_ICONS => Self::android_icons(),
            Self::SCREENSHOTS => Self::screenshots(),
            Self::REALISTIC => Self::realistic(),
            Self::FEATURE_GRAPHIC => Self::feature_graphic(),
            _ => return None,
        };
        Some(SizeCatalog {
            name: name.to_string(),
            sizes,
        })
    }

    /// Get all builtin catalogs.
    pub fn all() -> Vec<SizeCatalog> {
        Self::NAMES.iter().filter_map(|name| Self::get(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ios_icon_catalog() {
        let catalog = BuiltinCatalogs::get(BuiltinCatalogs::IOS_ICONS).unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.sizes[0], SizeSpec::square(20, "20x20"));
        assert_eq!(catalog.sizes[12], SizeSpec::square(1024, "1024x1024"));
    }

    #[test]
    fn test_android_icon_labels() {
        let catalog = BuiltinCatalogs::get(BuiltinCatalogs::ANDROID_ICONS).unwrap();
        let labels: Vec<&str> = catalog.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "36x36_ldpi",
                "48x48_mdpi",
                "72x72_hdpi",
                "96x96_xhdpi",
                "144x144_xxhdpi",
                "192x192_xxxhdpi",
                "512x512_playstore",
            ]
        );
    }

    #[test]
    fn test_screenshot_catalog_orientations() {
        let catalog = BuiltinCatalogs::get(BuiltinCatalogs::SCREENSHOTS).unwrap();
        assert_eq!(catalog.len(), 8);
        for spec in catalog.iter() {
            assert_eq!(spec.is_landscape(), spec.label.ends_with("Landscape"));
        }
    }

    #[test]
    fn test_is_tablet() {
        assert!(SizeSpec::new(2048, 2732, "iPad_Pro_Portrait").is_tablet());
        assert!(!SizeSpec::new(1290, 2796, "iPhone_Pro_Portrait").is_tablet());
    }

    #[test]
    fn test_all_builtin_catalogs_valid() {
        let all = BuiltinCatalogs::all();
        assert_eq!(all.len(), BuiltinCatalogs::NAMES.len());
        for catalog in all {
            assert!(SizeCatalog::new(catalog.name.clone(), catalog.sizes.clone()).is_ok());
        }
    }

    #[test]
    fn test_unknown_catalog() {
        assert!(BuiltinCatalogs::get("watch-icons").is_none());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = SizeCatalog::new("custom", vec![SizeSpec::new(0, 10, "bad")]).unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }

    #[test]
    fn test_label_with_separator_rejected() {
        assert!(SizeCatalog::new("custom", vec![SizeSpec::square(10, "a/b")]).is_err());
        assert!(SizeCatalog::new("custom", vec![SizeSpec::square(10, "  ")]).is_err());
        assert!(SizeCatalog::new("custom", vec![SizeSpec::square(10, "..")]).is_err());
        assert!(SizeCatalog::new("custom", vec![SizeSpec::square(10, ".")]).is_err());
        assert!(SizeCatalog::new("custom", vec![SizeSpec::square(10, "v1.2")]).is_ok());
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = SizeCatalog::new(
            "ios-icons",
            vec![SizeSpec::square(20, "x"), SizeSpec::square(40, "x")],
        )
        .unwrap_err();
        match err {
            ArtError::Config { message, help } => {
                assert!(message.contains("Duplicate size label 'x'"));
                assert!(help.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Same dimensions under different labels are fine.
        assert!(SizeCatalog::new("custom", vec![SizeSpec::square(20, "a"), SizeSpec::square(20, "b")]).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(SizeSpec::square(20, "20x20").to_string(), "20x20 (20x20)");
    }
}
