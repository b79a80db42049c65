//! storeart - Branded app-store asset generator
//!
//! A library for procedurally drawing app icons, marketing screenshots,
//! realistic mock screens and a feature graphic, and exporting them at
//! every size the App Store and Play Store ask for.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod template;
pub mod types;

pub use config::{Config, Manifest, MANIFEST_FILENAME};
pub use error::{ArtError, Result};
pub use export::{
    Destination, Event, ExportFailure, ExportJob, ExportReport, Exporter, FileSink, Grouping,
    ImageSink, Naming, TextSink,
};
pub use render::{write_png, Canvas, DrawOp, DrawPlan, FontResolver, Rect, RenderedImage, Typeface};
pub use template::{
    FeatureGraphicTemplate, IconTemplate, Layout, RealisticTemplate, ScreenshotTemplate, Template,
    Theme,
};
pub use types::{
    AssetVariant, BuiltinCatalogs, Colour, Content, Palette, RealisticScreen, SizeCatalog,
    SizeSpec,
};
