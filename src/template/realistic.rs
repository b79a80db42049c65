//! Realistic mock-UI screenshots.
//!
//! Five light-theme app screens laid out on a 430x932 reference canvas:
//! home, food delivery, home services, profile and card verification.

use crate::error::Result;
use crate::render::{DrawPlan, Rect};
use crate::types::{colours, AssetVariant, Colour, Line, RealisticScreen, SizeSpec};

use super::motif::{self, HouseStyle};
use super::{unsupported, Layout, Template, Theme};

const REFERENCE_WIDTH: f64 = 430.0;
const REFERENCE_HEIGHT: f64 = 932.0;
const TABLET_TYPE_SCALE: f64 = 1.4;

const STATUS_HEIGHT: f64 = 60.0;
const NAV_HEIGHT: f64 = 80.0;

/// Point sizes of the four text styles.
const HEADER_PT: f64 = 28.0;
const TITLE_PT: f64 = 24.0;
const BODY_PT: f64 = 18.0;
const SMALL_PT: f64 = 14.0;

/// Mock app screens for `Realistic(_)` variants.
pub struct RealisticTemplate<'a> {
    theme: Theme<'a>,
}

/// Per-render drawing context.
struct Screen<'t, 'a> {
    theme: &'t Theme<'a>,
    layout: Layout,
    type_scale: f64,
    /// Logical width and height.
    w: f64,
    h: f64,
}

/// Two-column card grid geometry.
struct Grid {
    top: f64,
    card_height: f64,
    title_y: f64,
    detail_y: f64,
    icon: Colour,
}

impl Screen<'_, '_> {
    fn font(&self, pt: f64) -> f32 {
        self.layout.font(pt * self.type_scale)
    }

    fn colour(&self, name: &str) -> Colour {
        self.theme.colour(name)
    }

    fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        self.layout.rect(x, y, w, h)
    }

    fn text(&self, plan: &mut DrawPlan, x: f64, y: f64, text: &str, pt: f64, colour: Colour) {
        plan.text(self.layout.at(x, y), text, self.font(pt), colour);
    }

    fn card(&self, plan: &mut DrawPlan, rect: Rect, radius: f64, fill: Colour) {
        plan.rounded_rect(rect, self.layout.px(radius), fill);
    }

    fn status_bar(&self, plan: &mut DrawPlan) {
        let white = self.colour(colours::WHITE);
        let content = self.theme.content;
        plan.layer("status-bar")
            .rect(self.rect(0.0, 0.0, self.w, STATUS_HEIGHT), self.colour(colours::PRIMARY));
        self.text(plan, 30.0, 20.0, &content.clock, TITLE_PT, white);
        self.text(plan, self.w - 150.0, 20.0, &content.battery, TITLE_PT, white);
    }

    /// Plain header band with a title and a detail line.
    fn header(&self, plan: &mut DrawPlan, line: &Line, height: f64) {
        let white = self.colour(colours::WHITE);
        plan.layer("header")
            .rect(self.rect(0.0, STATUS_HEIGHT, self.w, height), self.colour(colours::PRIMARY));
        self.text(plan, 30.0, 85.0, &line.title, HEADER_PT, white);
        self.text(plan, 30.0, 115.0, &line.detail, BODY_PT, white);
    }

    fn banner(&self, plan: &mut DrawPlan, y: f64, height: f64, fill: &str, line: &Line) {
        let white = self.colour(colours::WHITE);
        self.card(plan, self.rect(20.0, y, self.w - 40.0, height), 15.0, self.colour(fill));
        self.text(plan, 40.0, y + 20.0, &line.title, TITLE_PT, white);
        self.text(plan, 40.0, y + 50.0, &line.detail, BODY_PT, white);
    }

    fn grid(&self, plan: &mut DrawPlan, grid: &Grid, items: &[Line]) {
        let card_w = (self.w - 60.0) / 2.0;
        for (i, item) in items.iter().enumerate() {
            let x = 20.0 + (i % 2) as f64 * (card_w + 20.0);
            let y = grid.top + (i / 2) as f64 * (grid.card_height + 20.0);
            self.card(plan, self.rect(x, y, card_w, grid.card_height), 10.0, self.colour(colours::WHITE));
            plan.rounded_rect(self.rect(x + 20.0, y + 15.0, 26.0, 26.0), self.layout.px(6.0), grid.icon);
            self.text(plan, x + 20.0, y + grid.title_y, &item.title, TITLE_PT, self.colour(colours::INK));
            self.text(plan, x + 20.0, y + grid.detail_y, &item.detail, SMALL_PT, self.colour(colours::PRIMARY));
        }
    }

    fn nav(&self, plan: &mut DrawPlan, active: Option<usize>) {
        let nav_y = self.h - NAV_HEIGHT;
        plan.layer("nav")
            .rect(self.rect(0.0, nav_y, self.w, NAV_HEIGHT), self.colour(colours::WHITE));

        let items = &self.theme.content.nav;
        if items.is_empty() {
            return;
        }
        let cell_w = self.w / items.len() as f64;
        for (i, label) in items.iter().enumerate() {
            let x = i as f64 * cell_w;
            let colour = if active == Some(i) {
                plan.rect(self.rect(x, nav_y, cell_w, NAV_HEIGHT), self.colour(colours::PRIMARY));
                self.colour(colours::WHITE)
            } else {
                self.colour(colours::INK)
            };
            plan.ellipse(self.rect(x + cell_w / 2.0 - 12.0, nav_y + 12.0, 24.0, 24.0), colour)
                .text_centered(
                    self.rect(x, nav_y + 42.0, cell_w, 28.0),
                    label.as_str(),
                    self.font(SMALL_PT),
                    colour,
                );
        }
    }

    fn home(&self, plan: &mut DrawPlan) {
        let content = self.theme.content;
        let copy = &content.realistic.home;
        let white = self.colour(colours::WHITE);

        plan.layer("header")
            .rect(self.rect(0.0, STATUS_HEIGHT, self.w, 140.0), self.colour(colours::PRIMARY))
            .ellipse(self.rect(30.0, 80.0, 50.0, 50.0), white);
        motif::house(
            plan,
            self.theme,
            self.rect(42.0, 91.0, 26.0, 26.0),
            HouseStyle {
                outline: None,
                detailed: false,
            },
        );
        self.text(plan, 100.0, 90.0, &content.brand, HEADER_PT, white);
        motif::flag(plan, self.theme, self.rect(self.w - 80.0, 90.0, 40.0, 40.0), true);
        self.text(plan, 30.0, 140.0, &content.realistic.location, BODY_PT, white);

        plan.layer("body");
        self.banner(plan, 220.0, 100.0, colours::ACCENT, &copy.banner);
        self.banner(plan, 340.0, 80.0, colours::FLAG_STRIPE_3, &copy.priority);
        self.grid(
            plan,
            &Grid {
                top: 440.0,
                card_height: 120.0,
                title_y: 50.0,
                detail_y: 80.0,
                icon: self.colour(colours::PRIMARY),
            },
            &copy.categories,
        );
    }

    fn food(&self, plan: &mut DrawPlan) {
        let copy = &self.theme.content.realistic.food;
        let white = self.colour(colours::WHITE);
        self.header(plan, &copy.header, 80.0);

        plan.layer("body");
        self.card(plan, self.rect(20.0, 160.0, self.w - 40.0, 60.0), 10.0, self.colour(colours::ACCENT));
        self.text(plan, 40.0, 180.0, &copy.banner, TITLE_PT, white);

        let styles = [
            (BODY_PT, colours::PRIMARY),
            (BODY_PT, colours::ACCENT),
            (SMALL_PT, colours::PRIMARY),
        ];
        for (i, restaurant) in copy.restaurants.iter().enumerate() {
            let y = 240.0 + i as f64 * 140.0;
            self.card(plan, self.rect(20.0, y, self.w - 40.0, 120.0), 10.0, white);
            self.card(plan, self.rect(40.0, y + 20.0, 80.0, 80.0), 8.0, self.colour(colours::PRIMARY));
            self.text(plan, 140.0, y + 15.0, &restaurant.name, TITLE_PT, self.colour(colours::INK));
            for (j, (detail, (pt, colour))) in restaurant.details.iter().zip(styles).enumerate() {
                self.text(plan, 140.0, y + 40.0 + j as f64 * 25.0, detail, pt, self.colour(colour));
            }
        }
    }

    fn services(&self, plan: &mut DrawPlan) {
        let copy = &self.theme.content.realistic.services;
        self.header(plan, &copy.header, 80.0);

        plan.layer("body");
        self.grid(
            plan,
            &Grid {
                top: 160.0,
                card_height: 100.0,
                title_y: 45.0,
                detail_y: 70.0,
                icon: self.colour(colours::PRIMARY),
            },
            &copy.categories,
        );

        let styles = [(BODY_PT, colours::ACCENT), (SMALL_PT, colours::PRIMARY)];
        for (i, provider) in copy.providers.iter().enumerate() {
            let y = 400.0 + i as f64 * 120.0;
            self.card(plan, self.rect(20.0, y, self.w - 40.0, 100.0), 10.0, self.colour(colours::WHITE));
            plan.ellipse(self.rect(40.0, y + 20.0, 60.0, 60.0), self.colour(colours::PRIMARY));
            self.text(plan, 120.0, y + 15.0, &provider.name, TITLE_PT, self.colour(colours::INK));
            for (j, (detail, (pt, colour))) in provider.details.iter().zip(styles).enumerate() {
                self.text(plan, 120.0, y + 40.0 + j as f64 * 25.0, detail, pt, self.colour(colour));
            }
        }
    }

    fn profile(&self, plan: &mut DrawPlan) {
        let copy = &self.theme.content.realistic.profile;
        let white = self.colour(colours::WHITE);
        let primary = self.colour(colours::PRIMARY);

        plan.layer("header")
            .rect(self.rect(0.0, STATUS_HEIGHT, self.w, 120.0), primary)
            .ellipse(self.rect(30.0, 80.0, 80.0, 80.0), white);
        self.text(plan, 130.0, 85.0, &copy.name, HEADER_PT, white);
        for (i, status) in copy.status.iter().enumerate() {
            self.text(plan, 130.0, 115.0 + i as f64 * 25.0, status, BODY_PT, white);
        }

        plan.layer("body");
        self.card(plan, self.rect(20.0, 200.0, self.w - 40.0, 120.0), 15.0, white);
        self.text(plan, 40.0, 220.0, &copy.progress_title, TITLE_PT, self.colour(colours::INK));
        self.text(plan, 40.0, 250.0, &copy.points, HEADER_PT, primary);

        let bar_w = self.w - 80.0;
        self.card(plan, self.rect(40.0, 285.0, bar_w, 20.0), 10.0, self.colour(colours::TRACK));
        let filled = bar_w * copy.progress.clamp(0.0, 1.0) as f64;
        if filled > 0.0 {
            self.card(plan, self.rect(40.0, 285.0, filled, 20.0), 10.0, primary);
        }

        self.grid(
            plan,
            &Grid {
                top: 340.0,
                card_height: 100.0,
                title_y: 45.0,
                detail_y: 70.0,
                icon: self.colour(colours::ACCENT),
            },
            &copy.achievements,
        );
        self.banner(plan, 580.0, 80.0, colours::FLAG_STRIPE_3, &copy.next_level);
    }

    fn verification(&self, plan: &mut DrawPlan) {
        let copy = &self.theme.content.realistic.verification;
        let white = self.colour(colours::WHITE);
        let primary = self.colour(colours::PRIMARY);
        let ink = self.colour(colours::INK);

        plan.layer("header");
        motif::flag(plan, self.theme, self.rect(0.0, STATUS_HEIGHT, self.w, 140.0), false);
        self.text(plan, 30.0, 85.0, &copy.header.title, HEADER_PT, white);
        self.text(plan, 30.0, 115.0, &copy.header.detail, BODY_PT, white);

        plan.layer("body");
        let card_y = 220.0;
        self.card(plan, self.rect(20.0, card_y, self.w - 40.0, 180.0), 15.0, white);
        plan.rect(self.rect(20.0, card_y, self.w - 40.0, 40.0), self.colour(colours::FLAG_STRIPE_3));
        self.text(plan, 30.0, card_y + 10.0, &copy.card_title, TITLE_PT, white);
        let mut y = card_y + 60.0;
        for field in &copy.card_fields {
            self.text(plan, 40.0, y, field, BODY_PT, ink);
            y += 25.0;
        }
        self.text(plan, 40.0, y, &copy.card_status, BODY_PT, primary);

        let mut y = card_y + 200.0;
        self.text(plan, 30.0, y, &copy.benefits_title, TITLE_PT, ink);
        y += 40.0;
        for benefit in &copy.benefits {
            self.card(plan, self.rect(20.0, y, self.w - 40.0, 50.0), 10.0, white);
            self.text(plan, 40.0, y + 15.0, benefit, BODY_PT, primary);
            y += 60.0;
        }

        let button = self.rect(20.0, y + 20.0, self.w - 40.0, 60.0);
        self.card(plan, button, 30.0, primary);
        plan.text_centered(button, copy.button.as_str(), self.font(TITLE_PT), white);
    }
}

impl<'a> RealisticTemplate<'a> {
    pub fn new(theme: Theme<'a>) -> Self {
        Self { theme }
    }
}

impl Template for RealisticTemplate<'_> {
    fn name(&self) -> &'static str {
        "realistic"
    }

    fn plan(&self, size: &SizeSpec, variant: &AssetVariant) -> Result<DrawPlan> {
        let AssetVariant::Realistic(kind) = *variant else {
            return Err(unsupported(self.name(), variant));
        };
        let layout = Layout::fit(size, REFERENCE_WIDTH, REFERENCE_HEIGHT);
        let screen = Screen {
            theme: &self.theme,
            layout,
            type_scale: if size.is_tablet() { TABLET_TYPE_SCALE } else { 1.0 },
            w: layout.logical_width(),
            h: layout.logical_height(),
        };

        let mut plan = DrawPlan::new(size.width, size.height, self.theme.colour(colours::SURFACE));
        screen.status_bar(&mut plan);
        match kind {
            RealisticScreen::Home => screen.home(&mut plan),
            RealisticScreen::Food => screen.food(&mut plan),
            RealisticScreen::Services => screen.services(&mut plan),
            RealisticScreen::Profile => screen.profile(&mut plan),
            RealisticScreen::Verification => screen.verification(&mut plan),
        }
        screen.nav(&mut plan, kind.active_nav());
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, Typeface};
    use crate::types::{BuiltinCatalogs, Content, Palette};
    use pretty_assertions::assert_eq;

    fn plan_for(kind: RealisticScreen, size: &SizeSpec) -> DrawPlan {
        let palette = Palette::brand();
        let content = Content::default();
        RealisticTemplate::new(Theme::new(&palette, &content))
            .plan(size, &AssetVariant::Realistic(kind))
            .unwrap()
    }

    fn phone() -> SizeSpec {
        SizeSpec::new(1320, 2868, "iPhone_Pro_Max_Portrait")
    }

    #[test]
    fn test_every_screen_at_every_size() {
        let catalog = BuiltinCatalogs::get(BuiltinCatalogs::REALISTIC).unwrap();
        for size in catalog.iter() {
            for kind in RealisticScreen::ALL {
                let plan = plan_for(kind, size);
                assert_eq!(plan.dimensions(), size.dimensions());
                assert_eq!(plan.layers().first(), Some(&"status-bar"));
                assert_eq!(plan.layers().last(), Some(&"nav"));
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let palette = Palette::brand();
        let content = Content::default();
        let template = RealisticTemplate::new(Theme::new(&palette, &content));
        let size = SizeSpec::new(215, 466, "small");
        let variant = AssetVariant::Realistic(RealisticScreen::Profile);
        let a = template.render(&size, &variant, &Typeface::Builtin).unwrap();
        let b = template.render(&size, &variant, &Typeface::Builtin).unwrap();
        assert_eq!(a.dimensions(), (215, 466));
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_active_nav_cell_is_filled() {
        let primary = Palette::brand().colour(colours::PRIMARY);
        let filled_cells = |kind| {
            plan_for(kind, &phone())
                .steps()
                .iter()
                .filter(|s| s.layer == "nav")
                .filter(|s| matches!(s.op, DrawOp::Rect { fill, .. } if fill == primary))
                .count()
        };
        assert_eq!(filled_cells(RealisticScreen::Home), 1);
        assert_eq!(filled_cells(RealisticScreen::Food), 1);
        assert_eq!(filled_cells(RealisticScreen::Services), 0);
        assert_eq!(filled_cells(RealisticScreen::Verification), 0);
    }

    #[test]
    fn test_food_lists_restaurants() {
        let plan = plan_for(RealisticScreen::Food, &phone());
        let texts: Vec<&str> = plan.texts().collect();
        for name in ["KFC Ghana", "Pizza Hut", "Buka Restaurant", "Chop Bar Central"] {
            assert!(texts.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_progress_bar_scales_with_progress() {
        let palette = Palette::brand();
        let mut content = Content::default();
        content.realistic.profile.progress = 0.0;
        let empty = RealisticTemplate::new(Theme::new(&palette, &content))
            .plan(&phone(), &AssetVariant::Realistic(RealisticScreen::Profile))
            .unwrap();
        let full = plan_for(RealisticScreen::Profile, &phone());
        assert_eq!(empty.steps().len() + 1, full.steps().len());
    }

    #[test]
    fn test_tablet_text_is_larger() {
        let font_of = |size: &SizeSpec| {
            plan_for(RealisticScreen::Home, size)
                .steps()
                .iter()
                .find_map(|s| match &s.op {
                    DrawOp::Text { size, .. } => Some(*size),
                    _ => None,
                })
                .unwrap()
        };
        let phone_font = font_of(&SizeSpec::new(1320, 2868, "phone"));
        let tablet_font = font_of(&SizeSpec::new(1320, 2868, "iPad_Like"));
        assert!(tablet_font > phone_font);
    }
}
