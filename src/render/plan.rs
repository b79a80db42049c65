//! Ordered draw instructions.
//!
//! Templates describe an image as a list of steps. Later steps paint over
//! earlier ones, so the order of the list is the composition order. Each
//! step is tagged with the layer (region) it belongs to.

use super::canvas::{Canvas, Point, Rect};
use super::font::Typeface;
use super::png::RenderedImage;
use crate::types::Colour;

/// Where a text run is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextPlacement {
    /// Line box top-left at a point.
    At(Point),
    /// Ink box centred inside a rectangle.
    Centered(Rect),
}

/// A single canvas primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Gradient {
        rect: Rect,
        top: Colour,
        bottom: Colour,
    },
    Rect {
        rect: Rect,
        fill: Colour,
    },
    Outline {
        rect: Rect,
        colour: Colour,
        width: i32,
    },
    RoundedRect {
        rect: Rect,
        radius: i32,
        fill: Colour,
    },
    Ellipse {
        rect: Rect,
        fill: Colour,
    },
    Polygon {
        points: Vec<Point>,
        fill: Colour,
    },
    Line {
        from: Point,
        to: Point,
        colour: Colour,
        width: i32,
    },
    Text {
        text: String,
        size: f32,
        colour: Colour,
        placement: TextPlacement,
    },
}

impl DrawOp {
    fn apply(&self, canvas: &mut Canvas, typeface: &Typeface) {
        match self {
            DrawOp::Gradient { rect, top, bottom } => canvas.vertical_gradient(*rect, *top, *bottom),
            DrawOp::Rect { rect, fill } => canvas.fill_rect(*rect, *fill),
            DrawOp::Outline {
                rect,
                colour,
                width,
            } => canvas.stroke_rect(*rect, *colour, *width),
            DrawOp::RoundedRect { rect, radius, fill } => canvas.rounded_rect(*rect, *radius, *fill),
            DrawOp::Ellipse { rect, fill } => canvas.ellipse(*rect, *fill),
            DrawOp::Polygon { points, fill } => canvas.polygon(points, *fill),
            DrawOp::Line {
                from,
                to,
                colour,
                width,
            } => canvas.line(*from, *to, *colour, *width),
            DrawOp::Text {
                text,
                size,
                colour,
                placement,
            } => {
                let origin = match placement {
                    TextPlacement::At(point) => *point,
                    TextPlacement::Centered(rect) => typeface.measure(text, *size).center_in(*rect),
                };
                typeface.draw(canvas, origin, text, *size, *colour);
            }
        }
    }
}

/// One tagged step of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub layer: &'static str,
    pub op: DrawOp,
}

/// An ordered list of draw steps for one output size.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan {
    width: u32,
    height: u32,
    background: Colour,
    layer: &'static str,
    steps: Vec<Step>,
}

impl DrawPlan {
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            background,
            layer: "base",
            steps: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Tag subsequent steps with `layer`.
    pub fn layer(&mut self, layer: &'static str) -> &mut Self {
        self.layer = layer;
        self
    }

    /// Distinct layer names in first-drawn order.
    pub fn layers(&self) -> Vec<&'static str> {
        let mut layers: Vec<&'static str> = Vec::new();
        for step in &self.steps {
            if !layers.contains(&step.layer) {
                layers.push(step.layer);
            }
        }
        layers
    }

    pub fn has_layer(&self, layer: &str) -> bool {
        self.steps.iter().any(|s| s.layer == layer)
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|s| match &s.op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn push(&mut self, op: DrawOp) -> &mut Self {
        self.steps.push(Step {
            layer: self.layer,
            op,
        });
        self
    }

    pub fn gradient(&mut self, rect: Rect, top: Colour, bottom: Colour) -> &mut Self {
        self.push(DrawOp::Gradient { rect, top, bottom })
    }

    pub fn rect(&mut self, rect: Rect, fill: Colour) -> &mut Self {
        self.push(DrawOp::Rect { rect, fill })
    }

    pub fn outline(&mut self, rect: Rect, colour: Colour, width: i32) -> &mut Self {
        self.push(DrawOp::Outline {
            rect,
            colour,
            width,
        })
    }

    pub fn rounded_rect(&mut self, rect: Rect, radius: i32, fill: Colour) -> &mut Self {
        self.push(DrawOp::RoundedRect { rect, radius, fill })
    }

    pub fn ellipse(&mut self, rect: Rect, fill: Colour) -> &mut Self {
        self.push(DrawOp::Ellipse { rect, fill })
    }

    pub fn polygon(&mut self, points: Vec<Point>, fill: Colour) -> &mut Self {
        self.push(DrawOp::Polygon { points, fill })
    }

    pub fn line(&mut self, from: Point, to: Point, colour: Colour, width: i32) -> &mut Self {
        self.push(DrawOp::Line {
            from,
            to,
            colour,
            width,
        })
    }

    pub fn text(&mut self, at: Point, text: impl Into<String>, size: f32, colour: Colour) -> &mut Self {
        self.push(DrawOp::Text {
            text: text.into(),
            size,
            colour,
            placement: TextPlacement::At(at),
        })
    }

    pub fn text_centered(
        &mut self,
        rect: Rect,
        text: impl Into<String>,
        size: f32,
        colour: Colour,
    ) -> &mut Self {
        self.push(DrawOp::Text {
            text: text.into(),
            size,
            colour,
            placement: TextPlacement::Centered(rect),
        })
    }

    /// Execute every step in order onto a fresh canvas.
    pub fn render(&self, label: impl Into<String>, typeface: &Typeface) -> RenderedImage {
        let mut canvas = Canvas::new(self.width, self.height, self.background);
        for step in &self.steps {
            step.op.apply(&mut canvas, typeface);
        }
        RenderedImage::new(label, canvas.into_image())
    }
}
