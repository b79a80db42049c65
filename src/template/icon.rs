//! App icon template.

use crate::error::Result;
use crate::render::{stroke_width, DrawPlan, Rect};
use crate::types::{colours, AssetVariant, Colour, SizeSpec};

use super::motif;
use super::{frac, unsupported, Template, Theme};

/// Smallest icon that gets the corner badge.
pub const BADGE_MIN_SIZE: u32 = 64;

/// Smallest icon that gets window crosses.
pub const WINDOW_CROSS_MIN_SIZE: u32 = 64;

/// Smallest icon that gets the flag accent.
pub const FLAG_MIN_SIZE: u32 = 48;

/// Stroke divisors: outline width is `max(1, size / divisor)`.
const HOUSE_STROKE_DIVISOR: u32 = 100;
const WINDOW_STROKE_DIVISOR: u32 = 200;
const CROSS_STROKE_DIVISOR: u32 = 300;

/// Square app icon: gradient, house glyph and size-gated decorations.
pub struct IconTemplate<'a> {
    theme: Theme<'a>,
}

impl<'a> IconTemplate<'a> {
    pub fn new(theme: Theme<'a>) -> Self {
        Self { theme }
    }

    fn house(&self, plan: &mut DrawPlan, size: u32) {
        let theme = &self.theme;
        let primary = theme.colour(colours::PRIMARY);

        let hs = frac(size, 0.6);
        let house_x = (size as i32 - hs) / 2;
        let house_y = frac(size, 0.3);
        let part = |f: f64| (hs as f64 * f) as i32;

        plan.layer("house");
        let base_y = house_y + part(0.3);
        let base = Rect::new(house_x, base_y, hs, part(0.6));
        plan.rect(base, theme.colour(colours::WHITE))
            .outline(base, primary, stroke_width(size, HOUSE_STROKE_DIVISOR));

        let roof_y = base_y + part(0.05);
        plan.polygon(
            vec![
                (house_x + hs / 2, house_y),
                (house_x - part(0.1), roof_y),
                (house_x + hs + part(0.1), roof_y),
            ],
            theme.colour(colours::ACCENT),
        );

        let door_w = part(0.25).max(4);
        let door_h = part(0.4).max(6);
        let door = Rect::new(house_x + (hs - door_w) / 2, base.bottom() - door_h, door_w, door_h);
        plan.rect(door, primary);

        let handle = (size as i32 / 80).max(1);
        plan.ellipse(
            Rect::new(door.right() - handle * 3, door.y + door_h / 2, handle, handle),
            theme.colour(colours::FLAG_STRIPE_2),
        );

        let window = part(0.15).max(4);
        let window_y = base_y + part(0.15);
        let windows = [
            Rect::new(house_x + part(0.2), window_y, window, window),
            Rect::new(house_x + hs - part(0.2) - window, window_y, window, window),
        ];
        let glass = theme.colour(colours::WINDOW);
        for pane in windows {
            plan.rect(pane, glass)
                .outline(pane, primary, stroke_width(size, WINDOW_STROKE_DIVISOR));
        }

        if size >= WINDOW_CROSS_MIN_SIZE {
            plan.layer("window-cross");
            let width = stroke_width(size, CROSS_STROKE_DIVISOR);
            for pane in windows {
                let (mid_x, mid_y) = (pane.x + window / 2, window_y + window / 2);
                plan.line((mid_x, pane.y), (mid_x, pane.bottom()), primary, width)
                    .line((pane.x, mid_y), (pane.right(), mid_y), primary, width);
            }
        }
    }

    fn badge(&self, plan: &mut DrawPlan, size: u32) {
        let w = frac(size, 0.35);
        let h = frac(size, 0.15);
        let rect = Rect::new(size as i32 - w - frac(size, 0.05), frac(size, 0.05), w, h);
        let font = frac(size, 0.08).max(8) as f32;

        plan.layer("badge")
            .rounded_rect(rect, (h / 4).max(2), self.theme.colour(colours::FLAG_STRIPE_2))
            .text_centered(
                rect,
                self.theme.content.badge.as_str(),
                font,
                self.theme.colour(colours::PRIMARY),
            );
    }

    fn flag(&self, plan: &mut DrawPlan, size: u32) {
        let side = frac(size, 0.12);
        let rect = Rect::new(frac(size, 0.05), size as i32 - side - frac(size, 0.05), side, side);
        plan.layer("flag");
        motif::flag(plan, &self.theme, rect, false);
    }
}

impl Template for IconTemplate<'_> {
    fn name(&self) -> &'static str {
        "icon"
    }

    fn plan(&self, size: &SizeSpec, variant: &AssetVariant) -> Result<DrawPlan> {
        if *variant != AssetVariant::Icon {
            return Err(unsupported(self.name(), variant));
        }

        let mut plan = DrawPlan::new(size.width, size.height, Colour::TRANSPARENT);
        plan.layer("background").gradient(
            Rect::new(0, 0, size.width as i32, size.height as i32),
            self.theme.colour(colours::PRIMARY),
            self.theme.colour(colours::PRIMARY_LIGHT),
        );

        // Decorations scale with the short side so non-square specs still fit.
        let side = size.short_side();
        self.house(&mut plan, side);
        if side >= BADGE_MIN_SIZE {
            self.badge(&mut plan, side);
        }
        if side >= FLAG_MIN_SIZE {
            self.flag(&mut plan, side);
        }
        Ok(plan)
    }
}
