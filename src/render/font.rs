//! Font resolution and text measurement.
//!
//! A configured TrueType/OpenType file is loaded once per run. Any failure
//! falls back to the builtin bitmap font without returning an error; an
//! optional hook can observe the fallback.

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, FontVec, Glyph, PxScale, ScaleFont};

use super::bitmap;
use super::canvas::{Canvas, Point, Rect};
use crate::types::Colour;

/// Why the builtin font was used instead of the configured one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFallback {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for FontFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

type FallbackHook = Box<dyn Fn(&FontFallback)>;

/// Loads the configured font, falling back to the builtin bitmap font.
pub struct FontResolver {
    path: Option<PathBuf>,
    hook: Option<FallbackHook>,
}

impl FontResolver {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path, hook: None }
    }

    /// Observe fallbacks (missing file, unsupported format).
    pub fn on_fallback(mut self, hook: impl Fn(&FontFallback) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Resolve the typeface. Never fails.
    pub fn resolve(&self) -> Typeface {
        let Some(path) = &self.path else {
            return Typeface::Builtin;
        };

        match load_outline(path) {
            Ok(font) => Typeface::Outline(font),
            Err(reason) => {
                if let Some(hook) = &self.hook {
                    hook(&FontFallback {
                        path: path.clone(),
                        reason,
                    });
                }
                Typeface::Builtin
            }
        }
    }
}

fn load_outline(path: &Path) -> std::result::Result<FontArc, String> {
    let data = std::fs::read(path).map_err(|e| e.to_string())?;
    // Collections (.ttc) use their first face.
    let font = FontVec::try_from_vec_and_index(data, 0).map_err(|e| e.to_string())?;
    Ok(FontArc::new(font))
}

/// Ink bounds of a piece of text relative to its draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    /// Offset from the draw origin to the left edge of the ink.
    pub left: i32,
    /// Offset from the draw origin to the top edge of the ink.
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl TextExtent {
    /// Draw origin that centres this text inside `rect`.
    pub fn center_in(&self, rect: Rect) -> Point {
        (
            rect.x + (rect.width - self.width) / 2 - self.left,
            rect.y + (rect.height - self.height) / 2 - self.top,
        )
    }
}

/// A resolved font, sized per draw call.
#[derive(Clone)]
pub enum Typeface {
    Outline(FontArc),
    /// Fixed-size bitmap font; the size argument is ignored.
    Builtin,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::Outline(_) => write!(f, "Typeface::Outline"),
            Typeface::Builtin => write!(f, "Typeface::Builtin"),
        }
    }
}

impl Typeface {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    /// Measure the ink bounds of `text` at `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        match self {
            Typeface::Builtin => {
                let (width, height) = bitmap::measure(text);
                TextExtent {
                    left: 0,
                    top: 0,
                    width,
                    height,
                }
            }
            Typeface::Outline(font) => {
                let glyphs = layout(font, text, size, (0, 0));
                let mut bounds: Option<(f32, f32, f32, f32)> = None;
                for glyph in glyphs {
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let b = outlined.px_bounds();
                        bounds = Some(match bounds {
                            None => (b.min.x, b.min.y, b.max.x, b.max.y),
                            Some((x0, y0, x1, y1)) => {
                                (x0.min(b.min.x), y0.min(b.min.y), x1.max(b.max.x), y1.max(b.max.y))
                            }
                        });
                    }
                }
                match bounds {
                    Some((x0, y0, x1, y1)) => TextExtent {
                        left: x0 as i32,
                        top: y0 as i32,
                        width: (x1 - x0) as i32,
                        height: (y1 - y0) as i32,
                    },
                    None => TextExtent::default(),
                }
            }
        }
    }

    /// Draw `text` with its line box's top-left at `origin`.
    pub fn draw(&self, canvas: &mut Canvas, origin: Point, text: &str, size: f32, colour: Colour) {
        match self {
            Typeface::Builtin => bitmap::draw(canvas, origin, text, colour),
            Typeface::Outline(font) => {
                for glyph in layout(font, text, size, origin) {
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                        outlined.draw(|x, y, coverage| {
                            canvas.blend_coverage(left + x as i32, top + y as i32, colour, coverage);
                        });
                    }
                }
            }
        }
    }
}

/// Position glyphs along one line with kerning; baseline sits `ascent` below `origin`.
fn layout(font: &FontArc, text: &str, size: f32, origin: Point) -> Vec<Glyph> {
    let scale = PxScale::from(size.max(1.0));
    let scaled = font.as_scaled(scale);
    let baseline = origin.1 as f32 + scaled.ascent();

    let mut caret = origin.0 as f32;
    let mut previous = None;
    let mut glyphs = Vec::with_capacity(text.len());
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }
    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[test]
    fn test_no_font_configured_is_builtin() {
        let typeface = FontResolver::new(None).resolve();
        assert!(typeface.is_builtin());
    }

    #[test]
    fn test_missing_font_falls_back_silently() {
        let typeface = FontResolver::new(Some(PathBuf::from("/no/such/font.ttc"))).resolve();
        assert!(typeface.is_builtin());
    }

    #[test]
    fn test_fallback_hook_receives_reason() {
        let seen: Rc<RefCell<Vec<FontFallback>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let typeface = FontResolver::new(Some(PathBuf::from("/no/such/font.ttf")))
            .on_fallback(move |fallback| sink.borrow_mut().push(fallback.clone()))
            .resolve();

        assert!(typeface.is_builtin());
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, PathBuf::from("/no/such/font.ttf"));
        assert!(!seen[0].reason.is_empty());
    }

    #[test]
    fn test_unparseable_font_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let called = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&called);
        let typeface = FontResolver::new(Some(path))
            .on_fallback(move |_| *flag.borrow_mut() = true)
            .resolve();

        assert!(typeface.is_builtin());
        assert!(*called.borrow());
    }

    #[test]
    fn test_builtin_size_is_fixed() {
        let typeface = Typeface::Builtin;
        assert_eq!(typeface.measure("QUICK", 8.0), typeface.measure("QUICK", 80.0));
    }

    #[test]
    fn test_center_in_is_exact() {
        let extent = TextExtent {
            left: 0,
            top: 0,
            width: 10,
            height: 14,
        };
        assert_eq!(extent.center_in(Rect::new(100, 50, 30, 20)), (110, 53));

        let offset = TextExtent {
            left: 2,
            top: 5,
            width: 10,
            height: 14,
        };
        assert_eq!(offset.center_in(Rect::new(100, 50, 30, 20)), (108, 48));
    }

    #[test]
    fn test_builtin_centered_text_is_inside_badge() {
        let typeface = Typeface::Builtin;
        let badge = Rect::new(10, 10, 80, 30);
        let mut canvas = Canvas::new(100, 50, Colour::BLACK);
        let origin = typeface.measure("QUICK", 12.0).center_in(badge);
        typeface.draw(&mut canvas, origin, "QUICK", 12.0, Colour::WHITE);

        for y in 0..50 {
            for x in 0..100 {
                if canvas.get(x, y) == Some(Colour::WHITE) {
                    assert!(badge.contains(x, y));
                }
            }
        }
    }
}
