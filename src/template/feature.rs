//! Play Store feature graphic template.

use crate::error::Result;
use crate::render::{DrawPlan, Rect};
use crate::types::{colours, AssetVariant, Colour, SizeSpec};

use super::motif::{self, HouseStyle};
use super::{unsupported, Layout, Template, Theme};

const REFERENCE_WIDTH: f64 = 1024.0;
const REFERENCE_HEIGHT: f64 = 500.0;

/// Offset of the title drop shadow.
const SHADOW_OFFSET: f64 = 3.0;
/// Height of the accent bar along the bottom edge.
const ACCENT_BAR_HEIGHT: f64 = 8.0;

/// Wide banner: gradient, brand title with shadow, copy and decorations.
pub struct FeatureGraphicTemplate<'a> {
    theme: Theme<'a>,
}

impl<'a> FeatureGraphicTemplate<'a> {
    pub fn new(theme: Theme<'a>) -> Self {
        Self { theme }
    }
}

impl Template for FeatureGraphicTemplate<'_> {
    fn name(&self) -> &'static str {
        "feature-graphic"
    }

    fn plan(&self, size: &SizeSpec, variant: &AssetVariant) -> Result<DrawPlan> {
        if *variant != AssetVariant::FeatureGraphic {
            return Err(unsupported(self.name(), variant));
        }
        let l = Layout::fit(size, REFERENCE_WIDTH, REFERENCE_HEIGHT);
        let (w, h) = (l.logical_width(), l.logical_height());
        let content = self.theme.content;
        let copy = &content.feature_graphic;
        let white = self.theme.colour(colours::WHITE);

        let mut plan = DrawPlan::new(size.width, size.height, white);
        plan.layer("background").gradient(
            Rect::new(0, 0, size.width as i32, size.height as i32),
            self.theme.colour(colours::PRIMARY),
            self.theme.colour(colours::PRIMARY_LIGHT),
        );

        plan.layer("flag");
        motif::flag(&mut plan, &self.theme, l.rect(w - 100.0, 20.0, 80.0, 50.0), true);

        let (title_x, title_y) = (40.0, 60.0);
        plan.layer("title")
            .text(
                l.at(title_x + SHADOW_OFFSET, title_y + SHADOW_OFFSET),
                content.brand.as_str(),
                l.font(72.0),
                Colour::BLACK.with_alpha(100),
            )
            .text(l.at(title_x, title_y), content.brand.as_str(), l.font(72.0), white);

        let subtitle_y = title_y + 90.0;
        plan.layer("copy")
            .text(l.at(title_x, subtitle_y), copy.subtitle.as_str(), l.font(36.0), white)
            .text(
                l.at(title_x, subtitle_y + 50.0),
                copy.tagline.as_str(),
                l.font(28.0),
                white.with_alpha(200),
            );

        plan.layer("features");
        let features_y = subtitle_y + 110.0;
        for (i, feature) in copy.features.iter().enumerate() {
            plan.text(
                l.at(title_x, features_y + i as f64 * 35.0),
                feature.as_str(),
                l.font(24.0),
                white,
            );
        }

        plan.layer("accent").rect(
            l.rect(0.0, h - ACCENT_BAR_HEIGHT, w, ACCENT_BAR_HEIGHT),
            self.theme.colour(colours::ACCENT),
        );

        plan.layer("decorations")
            .ellipse(l.rect(w - 190.0, h / 2.0 - 40.0, 80.0, 80.0), white.with_alpha(50))
            .ellipse(l.rect(w - 225.0, h / 2.0 + 55.0, 50.0, 50.0), white.with_alpha(30));

        plan.layer("house");
        motif::house(
            &mut plan,
            &self.theme,
            l.rect(w - 160.0, h - 140.0, 80.0, 80.0),
            HouseStyle {
                outline: Some(l.stroke(3.0)),
                detailed: true,
            },
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, Typeface};
    use crate::types::{Content, Palette};
    use pretty_assertions::assert_eq;

    fn render(size: &SizeSpec) -> crate::render::RenderedImage {
        let palette = Palette::brand();
        let content = Content::default();
        FeatureGraphicTemplate::new(Theme::new(&palette, &content))
            .render(size, &AssetVariant::FeatureGraphic, &Typeface::Builtin)
            .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let image = render(&SizeSpec::new(1024, 500, "1024x500"));
        assert_eq!(image.dimensions(), (1024, 500));
        let image = render(&SizeSpec::new(512, 250, "512x250"));
        assert_eq!(image.dimensions(), (512, 250));
    }

    #[test]
    fn test_deterministic() {
        let size = SizeSpec::new(1024, 500, "1024x500");
        assert_eq!(render(&size).as_bytes(), render(&size).as_bytes());
    }

    #[test]
    fn test_accent_bar_on_bottom_row() {
        let image = render(&SizeSpec::new(1024, 500, "1024x500"));
        let accent = Palette::brand().colour(colours::ACCENT).to_rgba();
        assert_eq!(image.image().get_pixel(0, 499).0, accent);
        assert_eq!(image.image().get_pixel(0, 492).0, accent);
        assert_ne!(image.image().get_pixel(0, 491).0, accent);
    }

    #[test]
    fn test_shadow_drawn_before_title() {
        let palette = Palette::brand();
        let content = Content::default();
        let plan = FeatureGraphicTemplate::new(Theme::new(&palette, &content))
            .plan(&SizeSpec::new(1024, 500, "1024x500"), &AssetVariant::FeatureGraphic)
            .unwrap();
        let title: Vec<&DrawOp> = plan
            .steps()
            .iter()
            .filter(|s| s.layer == "title")
            .map(|s| &s.op)
            .collect();
        assert_eq!(title.len(), 2);
        assert!(matches!(title[0], DrawOp::Text { colour, .. } if colour.a == 100));
        assert!(matches!(title[1], DrawOp::Text { colour, .. } if colour.is_opaque()));
        assert_eq!(
            plan.layers(),
            vec!["background", "flag", "title", "copy", "features", "accent", "decorations", "house"]
        );
    }
}
