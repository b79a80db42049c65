//! Marketing screenshot template.
//!
//! Dark device frame around a branded gradient screen: status bar, header
//! with logo and title, copy, feature cards, bottom navigation and a flag.

use crate::error::Result;
use crate::render::DrawPlan;
use crate::types::{colours, AssetVariant, Colour, SizeSpec};

use super::motif::{self, HouseStyle};
use super::{unsupported, Layout, Template, Theme};

/// Reference short side for phone layouts.
const PHONE_REFERENCE: f64 = 1320.0;
/// Reference short side for tablet layouts.
const TABLET_REFERENCE: f64 = 2048.0;
/// Extra type scale on tablets.
const TABLET_TYPE_SCALE: f64 = 1.3;

const PHONE_MARGIN: f64 = 30.0;
const TABLET_MARGIN: f64 = 50.0;

/// Rendered marketing screenshot for `Screen(n)` variants.
pub struct ScreenshotTemplate<'a> {
    theme: Theme<'a>,
}

/// Reference-unit geometry for one screenshot.
struct Frame {
    layout: Layout,
    type_scale: f64,
    /// Content area origin and extent.
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(size: &SizeSpec) -> Self {
        let tablet = size.is_tablet();
        let layout = if tablet {
            Layout::short_side(size, TABLET_REFERENCE)
        } else {
            Layout::short_side(size, PHONE_REFERENCE)
        };
        let margin = if tablet { TABLET_MARGIN } else { PHONE_MARGIN };
        Self {
            layout,
            type_scale: if tablet { TABLET_TYPE_SCALE } else { 1.0 },
            x: margin,
            y: margin,
            width: layout.logical_width() - 2.0 * margin,
            height: layout.logical_height() - 2.0 * margin,
        }
    }

    fn font(&self, size: f64) -> f32 {
        self.layout.font(size * self.type_scale)
    }
}

impl<'a> ScreenshotTemplate<'a> {
    pub fn new(theme: Theme<'a>) -> Self {
        Self { theme }
    }

    fn status_bar(&self, plan: &mut DrawPlan, f: &Frame) {
        let l = &f.layout;
        let white = self.theme.colour(colours::WHITE);
        let y = f.y + 20.0;
        plan.layer("status-bar")
            .rect(l.rect(f.x, y, f.width, 50.0), Colour::BLACK.with_alpha(100))
            .text(l.at(f.x + 40.0, y + 10.0), self.theme.content.clock.as_str(), f.font(28.0), white);

        let battery_x = f.x + f.width - 100.0;
        plan.outline(l.rect(battery_x, y + 15.0, 60.0, 20.0), white, l.stroke(2.0))
            .rect(l.rect(battery_x + 5.0, y + 20.0, 45.0, 10.0), white);
    }

    fn header(&self, plan: &mut DrawPlan, f: &Frame, title: &str) -> f64 {
        let l = &f.layout;
        let header_y = f.y + 100.0;
        let (logo_x, logo_y) = (f.x + 40.0, header_y + 20.0);

        plan.layer("header")
            .rounded_rect(l.rect(logo_x, logo_y, 80.0, 80.0), l.px(15.0), self.theme.colour(colours::WHITE));
        motif::house(
            plan,
            &self.theme,
            l.rect(logo_x + 20.0, logo_y + 20.0, 40.0, 40.0),
            HouseStyle {
                outline: None,
                detailed: false,
            },
        );
        plan.text(
            l.at(logo_x + 110.0, header_y + 30.0),
            title,
            f.font(72.0),
            self.theme.colour(colours::WHITE),
        );
        header_y + 160.0
    }

    fn nav(&self, plan: &mut DrawPlan, f: &Frame, screen: u32) {
        let l = &f.layout;
        let nav_y = f.y + f.height - 100.0;
        plan.layer("nav").rounded_rect(
            l.rect(f.x, nav_y, f.width, 100.0),
            l.px(20.0),
            Colour::BLACK.with_alpha(50),
        );

        let items = &self.theme.content.nav;
        if items.is_empty() {
            return;
        }
        let cell_w = f.width / items.len() as f64;
        let active = (screen.saturating_sub(1) as usize) % items.len();
        for (i, label) in items.iter().enumerate() {
            let cell_x = f.x + i as f64 * cell_w;
            if i == active {
                plan.ellipse(
                    l.rect(cell_x + cell_w * 0.1, nav_y + 15.0, cell_w * 0.8, 70.0),
                    self.theme.colour(colours::ACCENT),
                );
            }
            plan.text_centered(
                l.rect(cell_x, nav_y, cell_w, 100.0),
                label.as_str(),
                f.font(36.0),
                self.theme.colour(colours::WHITE),
            );
        }
    }
}

impl Template for ScreenshotTemplate<'_> {
    fn name(&self) -> &'static str {
        "screenshot"
    }

    fn plan(&self, size: &SizeSpec, variant: &AssetVariant) -> Result<DrawPlan> {
        let AssetVariant::Screen(screen) = *variant else {
            return Err(unsupported(self.name(), variant));
        };
        let copy = self.theme.content.screen(screen);
        let f = Frame::new(size);
        let l = &f.layout;
        let white = self.theme.colour(colours::WHITE);

        let mut plan = DrawPlan::new(size.width, size.height, self.theme.colour(colours::INK));
        plan.layer("frame").rounded_rect(
            l.rect(20.0, 20.0, l.logical_width() - 40.0, l.logical_height() - 40.0),
            l.px(40.0),
            self.theme.colour(colours::FRAME),
        );
        plan.layer("background").gradient(
            l.rect(f.x, f.y, f.width, f.height),
            self.theme.colour(colours::PRIMARY),
            self.theme.colour(colours::PRIMARY_LIGHT),
        );

        self.status_bar(&mut plan, &f);
        let main_y = self.header(&mut plan, &f, &copy.title);

        plan.layer("copy")
            .text(l.at(f.x + 40.0, main_y), copy.subtitle.as_str(), f.font(48.0), white)
            .text(
                l.at(f.x + 40.0, main_y + 80.0),
                copy.tagline.as_str(),
                f.font(36.0),
                white.with_alpha(200),
            );

        plan.layer("features");
        let features_y = main_y + 180.0;
        for (i, feature) in copy.features.iter().enumerate() {
            let y = features_y + i as f64 * 70.0;
            plan.rounded_rect(
                l.rect(f.x + 40.0, y - 10.0, f.width - 80.0, 60.0),
                l.px(15.0),
                white.with_alpha(30),
            )
            .text(l.at(f.x + 60.0, y), feature.as_str(), f.font(36.0), white);
        }

        self.nav(&mut plan, &f, screen);

        plan.layer("flag");
        motif::flag(
            &mut plan,
            &self.theme,
            l.rect(f.x + f.width - 80.0, f.y + 20.0, 60.0, 60.0),
            true,
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, Typeface};
    use crate::types::{BuiltinCatalogs, Content, Palette};
    use pretty_assertions::assert_eq;

    fn with_template<T>(f: impl FnOnce(&ScreenshotTemplate) -> T) -> T {
        let palette = Palette::brand();
        let content = Content::default();
        f(&ScreenshotTemplate::new(Theme::new(&palette, &content)))
    }

    #[test]
    fn test_plan_dimensions_for_catalog() {
        let catalog = BuiltinCatalogs::get(BuiltinCatalogs::SCREENSHOTS).unwrap();
        with_template(|t| {
            for size in catalog.iter() {
                let plan = t.plan(size, &AssetVariant::Screen(1)).unwrap();
                assert_eq!(plan.dimensions(), size.dimensions());
            }
        });
    }

    #[test]
    fn test_render_dimensions_and_determinism() {
        let size = SizeSpec::new(330, 717, "iPhone_Small_Portrait");
        with_template(|t| {
            let a = t.render(&size, &AssetVariant::Screen(2), &Typeface::Builtin).unwrap();
            let b = t.render(&size, &AssetVariant::Screen(2), &Typeface::Builtin).unwrap();
            assert_eq!(a.dimensions(), (330, 717));
            assert_eq!(a.as_bytes(), b.as_bytes());
        });
    }

    #[test]
    fn test_draw_order() {
        with_template(|t| {
            let plan = t
                .plan(&SizeSpec::new(1320, 2868, "iPhone_Pro_Max_Portrait"), &AssetVariant::Screen(1))
                .unwrap();
            assert_eq!(
                plan.layers(),
                vec!["frame", "background", "status-bar", "header", "copy", "features", "nav", "flag"]
            );
        });
    }

    #[test]
    fn test_copy_comes_from_screen() {
        with_template(|t| {
            let plan = t
                .plan(&SizeSpec::new(1320, 2868, "phone"), &AssetVariant::Screen(3))
                .unwrap();
            let texts: Vec<&str> = plan.texts().collect();
            assert!(texts.contains(&"Home Services"));
            assert!(texts.contains(&"Flexible scheduling"));
        });
    }

    #[test]
    fn test_active_nav_item_cycles() {
        let highlight_x = |screen| {
            with_template(|t| {
                let plan = t
                    .plan(&SizeSpec::new(1320, 2868, "phone"), &AssetVariant::Screen(screen))
                    .unwrap();
                plan.steps()
                    .iter()
                    .filter(|s| s.layer == "nav")
                    .find_map(|s| match s.op {
                        DrawOp::Ellipse { rect, .. } => Some(rect.x),
                        _ => None,
                    })
                    .unwrap()
            })
        };
        assert!(highlight_x(1) < highlight_x(2));
        assert_eq!(highlight_x(1), highlight_x(5));
    }

    #[test]
    fn test_tablet_uses_wider_margin_and_larger_type() {
        let phone = Frame::new(&SizeSpec::new(2048, 2732, "Android_Tablet"));
        let tablet = Frame::new(&SizeSpec::new(2048, 2732, "iPad_Pro_Portrait"));
        assert_eq!(phone.x, PHONE_MARGIN);
        assert_eq!(tablet.x, TABLET_MARGIN);
        assert!(tablet.font(36.0) > 36.0);
    }

    #[test]
    fn test_rejects_icon_variant() {
        with_template(|t| {
            assert!(t.plan(&SizeSpec::new(100, 200, "x"), &AssetVariant::Icon).is_err());
        });
    }
}
