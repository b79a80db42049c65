//! Layout templates.
//!
//! A template turns a `(SizeSpec, AssetVariant)` pair into an ordered
//! `DrawPlan`. Templates hold only borrowed, immutable brand data, so the
//! same inputs always produce the same plan.

mod feature;
mod icon;
mod motif;
mod realistic;
mod screenshot;

pub use feature::FeatureGraphicTemplate;
pub use icon::{IconTemplate, BADGE_MIN_SIZE, FLAG_MIN_SIZE, WINDOW_CROSS_MIN_SIZE};
pub use realistic::RealisticTemplate;
pub use screenshot::ScreenshotTemplate;

use crate::error::{ArtError, Result};
use crate::render::{DrawPlan, Point, Rect, RenderedImage, Typeface};
use crate::types::{AssetVariant, Colour, Content, Palette, SizeSpec};

/// Composes one image for one size and content variant.
pub trait Template {
    /// Short name used in progress output.
    fn name(&self) -> &'static str;

    /// Build the ordered draw instructions for `variant` at `size`.
    fn plan(&self, size: &SizeSpec, variant: &AssetVariant) -> Result<DrawPlan>;

    /// Plan and rasterize in one step.
    fn render(
        &self,
        size: &SizeSpec,
        variant: &AssetVariant,
        typeface: &Typeface,
    ) -> Result<RenderedImage> {
        Ok(self.plan(size, variant)?.render(size.label.clone(), typeface))
    }
}

/// Brand inputs shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct Theme<'a> {
    pub palette: &'a Palette,
    pub content: &'a Content,
}

impl<'a> Theme<'a> {
    pub fn new(palette: &'a Palette, content: &'a Content) -> Self {
        Self { palette, content }
    }

    pub fn colour(&self, name: &str) -> Colour {
        self.palette.colour(name)
    }
}

fn unsupported(template: &str, variant: &AssetVariant) -> ArtError {
    ArtError::Render {
        message: format!("The {} template cannot render '{}'", template, variant),
        help: None,
    }
}

/// Maps a reference design onto a target size with one uniform unit.
///
/// Templates position everything in reference units; `px` converts to
/// target pixels, so the same layout holds at every catalog size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    width: i32,
    height: i32,
    unit: f64,
}

impl Layout {
    /// Scale so a `ref_width` x `ref_height` design fits inside `size`.
    pub fn fit(size: &SizeSpec, ref_width: f64, ref_height: f64) -> Self {
        let unit = (size.width as f64 / ref_width).min(size.height as f64 / ref_height);
        Self::with_unit(size, unit)
    }

    /// Scale by the ratio of the short side to `ref_short_side`.
    pub fn short_side(size: &SizeSpec, ref_short_side: f64) -> Self {
        Self::with_unit(size, size.short_side() as f64 / ref_short_side)
    }

    fn with_unit(size: &SizeSpec, unit: f64) -> Self {
        Self {
            width: size.width as i32,
            height: size.height as i32,
            unit: if unit > 0.0 { unit } else { 1.0 },
        }
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Target width in reference units.
    pub fn logical_width(&self) -> f64 {
        self.width as f64 / self.unit
    }

    /// Target height in reference units.
    pub fn logical_height(&self) -> f64 {
        self.height as f64 / self.unit
    }

    pub fn px(&self, v: f64) -> i32 {
        (v * self.unit).round() as i32
    }

    pub fn at(&self, x: f64, y: f64) -> Point {
        (self.px(x), self.px(y))
    }

    /// Rectangle in reference units. Edges are rounded independently so
    /// adjacent rectangles stay adjacent.
    pub fn rect(&self, x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::from_corners(self.px(x), self.px(y), self.px(x + width), self.px(y + height))
    }

    /// Stroke width in reference units, never thinner than one pixel.
    pub fn stroke(&self, width: f64) -> i32 {
        self.px(width).max(1)
    }

    /// Font size in pixels for a reference point size.
    pub fn font(&self, size: f64) -> f32 {
        (size * self.unit).max(1.0) as f32
    }
}

/// `size * fraction`, truncated.
pub(crate) fn frac(size: u32, fraction: f64) -> i32 {
    (size as f64 * fraction) as i32
}
