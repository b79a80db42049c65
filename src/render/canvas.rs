//! Raster canvas and drawing primitives.
//!
//! Every primitive works in integer pixel space with pixel-centre sampling,
//! clips to the canvas and blends translucent colours over what is already
//! there. Output is deterministic for identical inputs.

use image::{ImageBuffer, RgbaImage};

use crate::types::Colour;

/// A point in canvas pixel coordinates.
pub type Point = (i32, i32);

/// Axis-aligned rectangle, half-open: covers `x..x+width`, `y..y+height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two corners (`right`/`bottom` exclusive).
    pub fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn center(&self) -> Point {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Shrink by `d` on every side.
    pub fn inset(&self, d: i32) -> Rect {
        Rect::new(self.x + d, self.y + d, self.width - 2 * d, self.height - 2 * d)
    }

    /// Square of side `2 * radius` around a centre point.
    pub fn around(center: Point, radius: i32) -> Rect {
        Rect::new(center.0 - radius, center.1 - radius, 2 * radius, 2 * radius)
    }

    /// Does the rectangle contain the pixel at `(x, y)`?
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Proportional stroke width: `max(1, size / divisor)`.
///
/// Keeps line weight visually constant from a 20px icon to a 1024px one.
pub fn stroke_width(size: u32, divisor: u32) -> i32 {
    (size / divisor.max(1)).max(1) as i32
}

/// An RGBA raster surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read a pixel; `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .map(|px| Colour::from(*px))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Blend `colour` over one pixel, ignoring out-of-bounds coordinates.
    pub fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        *px = colour.over(Colour::from(*px)).into();
    }

    /// Blend `colour` with its alpha scaled by `coverage` (0.0..=1.0).
    pub fn blend_coverage(&mut self, x: i32, y: i32, colour: Colour, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }
        let alpha = (colour.a as f32 * coverage).round() as u8;
        self.blend_pixel(x, y, colour.with_alpha(alpha));
    }

    /// Fill the half-open span `x0..x1` on row `y`.
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, colour: Colour) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i32);
        for x in x0..x1 {
            self.blend_pixel(x, y, colour);
        }
    }

    /// Fill the whole canvas.
    pub fn fill(&mut self, colour: Colour) {
        let rect = Rect::new(0, 0, self.width() as i32, self.height() as i32);
        self.fill_rect(rect, colour);
    }

    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.bottom() {
            self.fill_span(y, rect.x, rect.right(), colour);
        }
    }

    /// Outline drawn inside the rectangle's bounds.
    pub fn stroke_rect(&mut self, rect: Rect, colour: Colour, width: i32) {
        if rect.is_empty() || width <= 0 {
            return;
        }
        let w = width.min(rect.width).min(rect.height);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, w), colour);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - w, rect.width, w), colour);
        let inner_height = rect.height - 2 * w;
        self.fill_rect(Rect::new(rect.x, rect.y + w, w, inner_height), colour);
        self.fill_rect(Rect::new(rect.right() - w, rect.y + w, w, inner_height), colour);
    }

    /// Linear top-to-bottom gradient from `top` to `bottom`.
    ///
    /// Row `i` of `h` uses `ratio = i / (h - 1)`, each channel truncated, so the
    /// first row is exactly `top` and the last row exactly `bottom`.
    pub fn vertical_gradient(&mut self, rect: Rect, top: Colour, bottom: Colour) {
        if rect.is_empty() {
            return;
        }
        let span = (rect.height - 1).max(1) as f64;
        for i in 0..rect.height {
            let colour = top.lerp(bottom, i as f64 / span);
            self.fill_span(rect.y + i, rect.x, rect.right(), colour);
        }
    }

    /// Filled rectangle with circular corners of `radius`.
    pub fn rounded_rect(&mut self, rect: Rect, radius: i32, colour: Colour) {
        if rect.is_empty() {
            return;
        }
        let radius = radius.clamp(0, rect.width.min(rect.height) / 2);
        if radius == 0 {
            self.fill_rect(rect, colour);
            return;
        }
        let r = radius as f64;
        for i in 0..rect.height {
            let cy = i as f64 + 0.5;
            let from_edge = if cy < r {
                r - cy
            } else if cy > rect.height as f64 - r {
                cy - (rect.height as f64 - r)
            } else {
                0.0
            };
            let inset = if from_edge > 0.0 {
                (r - (r * r - from_edge * from_edge).max(0.0).sqrt()).round() as i32
            } else {
                0
            };
            self.fill_span(rect.y + i, rect.x + inset, rect.right() - inset, colour);
        }
    }

    /// Filled ellipse inscribed in `rect`.
    pub fn ellipse(&mut self, rect: Rect, colour: Colour) {
        if rect.is_empty() {
            return;
        }
        let rx = rect.width as f64 / 2.0;
        let ry = rect.height as f64 / 2.0;
        let cx = rect.x as f64 + rx;
        for i in 0..rect.height {
            let dy = (i as f64 + 0.5 - ry) / ry;
            let half = rx * (1.0 - dy * dy).max(0.0).sqrt();
            let x0 = (cx - half).round() as i32;
            let x1 = (cx + half).round() as i32;
            self.fill_span(rect.y + i, x0, x1, colour);
        }
    }

    /// Filled polygon (even-odd rule).
    pub fn polygon(&mut self, points: &[Point], colour: Colour) {
        let points: Vec<(f64, f64)> = points
            .iter()
            .map(|&(x, y)| (x as f64 + 0.5, y as f64 + 0.5))
            .collect();
        self.fill_polygon(&points, colour);
    }

    /// Straight line of `width` pixels between two pixel centres, square caps.
    pub fn line(&mut self, from: Point, to: Point, colour: Colour, width: i32) {
        let width = width.max(1) as f64;
        let (x0, y0) = (from.0 as f64 + 0.5, from.1 as f64 + 0.5);
        let (x1, y1) = (to.0 as f64 + 0.5, to.1 as f64 + 0.5);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len = (dx * dx + dy * dy).sqrt();
        let (ux, uy) = if len > 0.0 { (dx / len, dy / len) } else { (1.0, 0.0) };
        let half = width / 2.0;
        // Along-axis (square cap) and perpendicular offsets.
        let (ax, ay) = (ux * half, uy * half);
        let (px, py) = (-uy * half, ux * half);
        let quad = [
            (x0 - ax + px, y0 - ay + py),
            (x1 + ax + px, y1 + ay + py),
            (x1 + ax - px, y1 + ay - py),
            (x0 - ax - px, y0 - ay - py),
        ];
        self.fill_polygon(&quad, colour);
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], colour: Colour) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let y_start = (min_y.floor() as i32).max(0);
        let y_end = (max_y.ceil() as i32).min(self.height() as i32);

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
        for y in y_start..y_end {
            let sy = y as f64 + 0.5;
            crossings.clear();
            for (i, &(xa, ya)) in points.iter().enumerate() {
                let (xb, yb) = points[(i + 1) % points.len()];
                if (ya <= sy && sy < yb) || (yb <= sy && sy < ya) {
                    crossings.push(xa + (sy - ya) * (xb - xa) / (yb - ya));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).ceil() as i32;
                self.fill_span(y, x0, x1, colour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Colour = Colour::rgb(46, 139, 87);
    const LIGHT: Colour = Colour::rgb(60, 179, 113);

    fn count(canvas: &Canvas, colour: Colour) -> usize {
        canvas
            .image()
            .pixels()
            .filter(|p| Colour::from(**p) == colour)
            .count()
    }

    #[test]
    fn test_stroke_width_scales_with_size() {
        assert_eq!(stroke_width(20, 100), 1);
        assert_eq!(stroke_width(99, 100), 1);
        assert_eq!(stroke_width(1024, 100), 10);
        assert_eq!(stroke_width(1024, 300), 3);
        assert_eq!(stroke_width(10, 0), 10);
    }

    #[test]
    fn test_gradient_endpoints() {
        for height in [1, 2, 20, 63, 500, 2868] {
            let mut canvas = Canvas::new(4, height, Colour::TRANSPARENT);
            canvas.vertical_gradient(Rect::new(0, 0, 4, height as i32), GREEN, LIGHT);
            assert_eq!(canvas.get(0, 0), Some(GREEN));
            let last = canvas.get(3, height as i32 - 1).unwrap();
            if height > 1 {
                assert!((last.r as i32 - LIGHT.r as i32).abs() <= 1);
                assert!((last.g as i32 - LIGHT.g as i32).abs() <= 1);
                assert!((last.b as i32 - LIGHT.b as i32).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_gradient_is_deterministic() {
        let render = || {
            let mut canvas = Canvas::new(16, 300, Colour::BLACK);
            canvas.vertical_gradient(Rect::new(2, 5, 10, 250), GREEN, LIGHT);
            canvas.into_image().into_raw()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_gradient_rows_are_uniform() {
        let mut canvas = Canvas::new(8, 8, Colour::TRANSPARENT);
        canvas.vertical_gradient(Rect::new(0, 0, 8, 8), GREEN, LIGHT);
        for y in 0..8 {
            let first = canvas.get(0, y);
            for x in 1..8 {
                assert_eq!(canvas.get(x, y), first);
            }
        }
    }

    #[test]
    fn test_fill_rect_is_half_open_and_clipped() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        canvas.fill_rect(Rect::new(8, 8, 5, 5), Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 4);
        canvas.fill_rect(Rect::new(-3, -3, 4, 4), Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 5);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut canvas = Canvas::new(1, 1, Colour::BLACK);
        canvas.fill(Colour::new(255, 255, 255, 128));
        let px = canvas.get(0, 0).unwrap();
        assert!(px.r > 100 && px.r < 150);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        canvas.stroke_rect(Rect::new(0, 0, 10, 10), Colour::WHITE, 2);
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
        assert_eq!(canvas.get(1, 5), Some(Colour::WHITE));
        assert_eq!(canvas.get(5, 5), Some(Colour::BLACK));
        assert_eq!(count(&canvas, Colour::WHITE), 100 - 36);
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut canvas = Canvas::new(20, 20, Colour::BLACK);
        canvas.rounded_rect(Rect::new(0, 0, 20, 20), 6, Colour::WHITE);
        assert_eq!(canvas.get(0, 0), Some(Colour::BLACK));
        assert_eq!(canvas.get(19, 19), Some(Colour::BLACK));
        assert_eq!(canvas.get(10, 0), Some(Colour::WHITE));
        assert_eq!(canvas.get(0, 10), Some(Colour::WHITE));
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_rect() {
        let mut canvas = Canvas::new(5, 5, Colour::BLACK);
        canvas.rounded_rect(Rect::new(0, 0, 5, 5), 0, Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 25);
    }

    #[test]
    fn test_ellipse_inside_bounds() {
        let mut canvas = Canvas::new(20, 20, Colour::BLACK);
        canvas.ellipse(Rect::new(5, 5, 10, 10), Colour::WHITE);
        assert_eq!(canvas.get(10, 10), Some(Colour::WHITE));
        assert_eq!(canvas.get(5, 5), Some(Colour::BLACK));
        assert_eq!(canvas.get(4, 10), Some(Colour::BLACK));
        assert_eq!(canvas.get(15, 10), Some(Colour::BLACK));
    }

    #[test]
    fn test_polygon_triangle() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        canvas.polygon(&[(5, 0), (0, 9), (9, 9)], Colour::WHITE);
        assert_eq!(canvas.get(5, 5), Some(Colour::WHITE));
        assert_eq!(canvas.get(0, 0), Some(Colour::BLACK));
        assert_eq!(canvas.get(9, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.polygon(&[(0, 0), (3, 3)], Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 0);
    }

    #[test]
    fn test_vertical_line_width_one() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        canvas.line((4, 2), (4, 7), Colour::WHITE, 1);
        for y in 2..=7 {
            assert_eq!(canvas.get(4, y), Some(Colour::WHITE), "row {}", y);
        }
        assert_eq!(canvas.get(3, 4), Some(Colour::BLACK));
        assert_eq!(canvas.get(5, 4), Some(Colour::BLACK));
        assert_eq!(count(&canvas, Colour::WHITE), 6);
    }

    #[test]
    fn test_horizontal_line_width_three() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        canvas.line((1, 5), (8, 5), Colour::WHITE, 3);
        assert_eq!(canvas.get(4, 4), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 5), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 6), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 3), Some(Colour::BLACK));
    }

    #[test]
    fn test_rect_helpers() {
        let r = Rect::from_corners(2, 3, 12, 8);
        assert_eq!(r, Rect::new(2, 3, 10, 5));
        assert_eq!(r.center(), (7, 5));
        assert_eq!(r.inset(1), Rect::new(3, 4, 8, 3));
        assert!(r.contains(2, 3));
        assert!(!r.contains(12, 3));
        assert_eq!(Rect::around((5, 5), 2), Rect::new(3, 3, 4, 4));
    }
}
