//! Rendering module for storeart.
//!
//! This module turns draw plans into RGBA rasters using the canvas
//! primitives and the resolved typeface.

mod bitmap;
mod canvas;
mod font;
mod plan;
mod png;

pub use canvas::{stroke_width, Canvas, Point, Rect};
pub use font::{FontFallback, FontResolver, TextExtent, Typeface};
pub use plan::{DrawOp, DrawPlan, Step, TextPlacement};
pub use png::{write_png, RenderedImage};
