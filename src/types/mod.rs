//! Core domain types for storeart.
//!
//! This module contains the static inputs of the pipeline:
//! - `Colour` - RGBA colour values
//! - `Palette` - Named brand colours
//! - `SizeSpec` / `SizeCatalog` - Required output dimensions per store
//! - `Content` / `AssetVariant` - What each render draws

mod colour;
mod content;
mod palette;
mod size;
mod variant;

pub use colour::Colour;
pub use content::{
    Content, FeatureCopy, FoodCopy, HomeCopy, Line, Listing, ProfileCopy, RealisticCopy,
    ScreenCopy, ServicesCopy, VerificationCopy,
};
pub use palette::{names as colours, Palette};
pub use size::{BuiltinCatalogs, SizeCatalog, SizeSpec};
pub use variant::{AssetVariant, RealisticScreen};
