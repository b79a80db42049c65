//! Write capabilities the pipeline needs from its environment.

use std::fs;
use std::path::Path;

use crate::error::{ArtError, Result};
use crate::render::{write_png, RenderedImage};

/// "Write this finished image to path P."
pub trait ImageSink {
    fn write_image(&self, image: &RenderedImage, path: &Path) -> Result<()>;
}

/// "Write this finished text blob to path P."
pub trait TextSink {
    fn write_text(&self, text: &str, path: &Path) -> Result<()>;
}

/// Writes images as PNG files and text as UTF-8 files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl ImageSink for FileSink {
    fn write_image(&self, image: &RenderedImage, path: &Path) -> Result<()> {
        write_png(image, path)
    }
}

impl TextSink for FileSink {
    fn write_text(&self, text: &str, path: &Path) -> Result<()> {
        fs::write(path, text).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write file: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = RenderedImage::new("3x2", RgbaImage::new(3, 2));

        FileSink.write_image(&image, &path).unwrap();

        assert_eq!(image::open(&path).unwrap().to_rgba8().dimensions(), (3, 2));
    }

    #[test]
    fn test_file_sink_writes_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        FileSink.write_text("hello\n", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_text_into_missing_dir_is_io_error() {
        let dir = tempdir().unwrap();
        let err = FileSink
            .write_text("x", &dir.path().join("nope").join("a.txt"))
            .unwrap_err();
        assert!(matches!(err, ArtError::Io { .. }));
    }
}
