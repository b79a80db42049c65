//! Brand motifs shared between templates.

use std::f64::consts::PI;

use crate::render::{DrawPlan, Point, Rect};
use crate::types::colours;

use super::Theme;

/// Smallest star radius worth drawing.
const STAR_MIN_RADIUS: i32 = 2;

/// Three horizontal stripes, optionally with a centred star.
pub fn flag(plan: &mut DrawPlan, theme: &Theme, rect: Rect, star: bool) {
    let first = rect.y + rect.height / 3;
    let second = rect.y + 2 * rect.height / 3;
    plan.rect(
        Rect::from_corners(rect.x, rect.y, rect.right(), first),
        theme.colour(colours::FLAG_STRIPE_1),
    )
    .rect(
        Rect::from_corners(rect.x, first, rect.right(), second),
        theme.colour(colours::FLAG_STRIPE_2),
    )
    .rect(
        Rect::from_corners(rect.x, second, rect.right(), rect.bottom()),
        theme.colour(colours::FLAG_STRIPE_3),
    );

    let radius = rect.height / 5;
    if star && radius >= STAR_MIN_RADIUS {
        plan.polygon(star_points(rect.center(), radius), theme.colour(colours::STAR));
    }
}

/// Five-pointed star with its first point straight up.
pub fn star_points(center: Point, radius: i32) -> Vec<Point> {
    let outer = radius as f64;
    let inner = outer * 0.382;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + i as f64 * PI / 5.0;
            (
                center.0 + (r * angle.cos()).round() as i32,
                center.1 + (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Which parts of the house glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseStyle {
    /// Outline width around the base, if any.
    pub outline: Option<i32>,
    /// Draw the door and windows.
    pub detailed: bool,
}

/// Simplified house: base, roof, and optionally a door and two windows.
///
/// `rect` is the square the glyph occupies; the roof overhangs it sideways.
pub fn house(plan: &mut DrawPlan, theme: &Theme, rect: Rect, style: HouseStyle) {
    let s = rect.width as f64;
    let part = |f: f64| (s * f).round() as i32;
    let primary = theme.colour(colours::PRIMARY);

    let base = Rect::from_corners(rect.x, rect.y + part(0.25), rect.right(), rect.bottom());
    if let Some(width) = style.outline {
        plan.rect(base, theme.colour(colours::WHITE))
            .outline(base, primary, width);
    } else {
        plan.rect(base, primary);
    }

    let overhang = part(0.125);
    plan.polygon(
        vec![
            (rect.x + rect.width / 2, rect.y),
            (rect.x - overhang, rect.y + part(0.375)),
            (rect.right() + overhang, rect.y + part(0.375)),
        ],
        theme.colour(colours::ACCENT),
    );

    if !style.detailed {
        return;
    }

    let door_w = part(0.25);
    let door_h = part(0.375);
    plan.rect(
        Rect::new(rect.x + (rect.width - door_w) / 2, rect.bottom() - door_h, door_w, door_h),
        primary,
    );

    let window = part(0.15);
    let window_y = rect.y + part(0.4375);
    let inset = part(0.1875);
    let glass = theme.colour(colours::WINDOW);
    plan.rect(Rect::new(rect.x + inset, window_y, window, window), glass)
        .rect(Rect::new(rect.right() - inset - window, window_y, window, window), glass);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawOp;
    use crate::types::{Colour, Content, Palette};
    use pretty_assertions::assert_eq;

    fn theme_parts() -> (Palette, Content) {
        (Palette::brand(), Content::default())
    }

    #[test]
    fn test_star_points_start_at_top() {
        let points = star_points((50, 50), 10);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], (50, 40));
    }

    #[test]
    fn test_flag_stripes_cover_rect() {
        let (palette, content) = theme_parts();
        let theme = Theme::new(&palette, &content);
        let mut plan = DrawPlan::new(100, 100, Colour::WHITE);
        flag(&mut plan, &theme, Rect::new(10, 10, 60, 60), true);

        let rects: Vec<Rect> = plan
            .steps()
            .iter()
            .filter_map(|s| match s.op {
                DrawOp::Rect { rect, .. } => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].y, 10);
        assert_eq!(rects[0].bottom(), rects[1].y);
        assert_eq!(rects[1].bottom(), rects[2].y);
        assert_eq!(rects[2].bottom(), 70);
        assert!(matches!(plan.steps()[3].op, DrawOp::Polygon { .. }));
    }

    #[test]
    fn test_tiny_flag_has_no_star() {
        let (palette, content) = theme_parts();
        let theme = Theme::new(&palette, &content);
        let mut plan = DrawPlan::new(10, 10, Colour::WHITE);
        flag(&mut plan, &theme, Rect::new(0, 0, 6, 6), true);
        assert_eq!(plan.steps().len(), 3);
    }

    #[test]
    fn test_house_detail() {
        let (palette, content) = theme_parts();
        let theme = Theme::new(&palette, &content);

        let mut simple = DrawPlan::new(100, 100, Colour::WHITE);
        house(
            &mut simple,
            &theme,
            Rect::new(20, 20, 40, 40),
            HouseStyle {
                outline: None,
                detailed: false,
            },
        );
        assert_eq!(simple.steps().len(), 2);

        let mut detailed = DrawPlan::new(100, 100, Colour::WHITE);
        house(
            &mut detailed,
            &theme,
            Rect::new(10, 10, 80, 80),
            HouseStyle {
                outline: Some(3),
                detailed: true,
            },
        );
        // base, outline, roof, door, two windows
        assert_eq!(detailed.steps().len(), 6);
    }
}
