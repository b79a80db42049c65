//! Content variants: which screen or icon purpose a render is for.

use std::fmt;

/// One of the realistic mock screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealisticScreen {
    Home,
    Food,
    Services,
    Profile,
    Verification,
}

impl RealisticScreen {
    /// All screens in output order.
    pub const ALL: [RealisticScreen; 5] = [
        RealisticScreen::Home,
        RealisticScreen::Food,
        RealisticScreen::Services,
        RealisticScreen::Profile,
        RealisticScreen::Verification,
    ];

    /// Stable id, used as the file name stem.
    pub fn id(self) -> &'static str {
        match self {
            RealisticScreen::Home => "01_home_screen",
            RealisticScreen::Food => "02_food_delivery",
            RealisticScreen::Services => "03_home_services",
            RealisticScreen::Profile => "04_profile_gamification",
            RealisticScreen::Verification => "05_ghana_card_verification",
        }
    }

    /// Look a screen up by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Bottom navigation item highlighted on this screen, if any.
    pub fn active_nav(self) -> Option<usize> {
        match self {
            RealisticScreen::Home => Some(0),
            RealisticScreen::Food => Some(1),
            RealisticScreen::Profile => Some(3),
            RealisticScreen::Services | RealisticScreen::Verification => None,
        }
    }
}

/// The content descriptor for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetVariant {
    /// The app icon.
    Icon,
    /// Marketing screenshot by 1-based screen number.
    Screen(u32),
    /// One of the realistic mock screens.
    Realistic(RealisticScreen),
    /// The store feature graphic.
    FeatureGraphic,
}

impl AssetVariant {
    /// Stable id used in file names.
    pub fn id(&self) -> String {
        match self {
            AssetVariant::Icon => "icon".to_string(),
            AssetVariant::Screen(n) => n.to_string(),
            AssetVariant::Realistic(screen) => screen.id().to_string(),
            AssetVariant::FeatureGraphic => "feature_graphic".to_string(),
        }
    }

    /// Marketing screen variants for the given screen numbers.
    pub fn screens(numbers: impl IntoIterator<Item = u32>) -> Vec<AssetVariant> {
        numbers.into_iter().map(AssetVariant::Screen).collect()
    }

    /// All realistic screen variants.
    pub fn realistic() -> Vec<AssetVariant> {
        RealisticScreen::ALL
            .into_iter()
            .map(AssetVariant::Realistic)
            .collect()
    }
}

impl fmt::Display for AssetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetVariant::Screen(n) => write!(f, "screen {}", n),
            other => write!(f, "{}", other.id()),
        }
    }
}
