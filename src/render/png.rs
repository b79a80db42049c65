//! Rendered images and PNG output.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{ArtError, Result};

/// A finished raster produced by one template invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    /// Label of the size spec it was rendered for.
    pub label: String,
    image: RgbaImage,
}

impl RenderedImage {
    pub fn new(label: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            label: label.into(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }
}

/// Write a rendered image to a PNG file.
pub fn write_png(rendered: &RenderedImage, path: &Path) -> Result<()> {
    rendered
        .image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
