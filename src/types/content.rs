//! Copy drawn into templates.
//!
//! Content is read-only lookup data: the builtin brand copy can be replaced
//! wholesale or per section from the project manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// All text content used by the templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Brand / app name.
    pub brand: String,
    /// Badge drawn on large icons.
    pub badge: String,
    /// Status bar clock.
    pub clock: String,
    /// Battery label in realistic status bars.
    pub battery: String,
    /// Marketing screenshots keyed by 1-based screen number.
    pub screens: BTreeMap<u32, ScreenCopy>,
    pub feature_graphic: FeatureCopy,
    /// Bottom navigation labels.
    pub nav: Vec<String>,
    pub realistic: RealisticCopy,
}

/// Copy for one marketing screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenCopy {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub features: Vec<String>,
}

/// Copy for the feature graphic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureCopy {
    pub subtitle: String,
    pub tagline: String,
    pub features: Vec<String>,
}

/// A headline with a detail line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub title: String,
    pub detail: String,
}

/// A list entry (restaurant, provider) with up to three detail lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub details: Vec<String>,
}

/// Copy for the five realistic mock screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealisticCopy {
    pub location: String,
    pub home: HomeCopy,
    pub food: FoodCopy,
    pub services: ServicesCopy,
    pub profile: ProfileCopy,
    pub verification: VerificationCopy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeCopy {
    pub banner: Line,
    pub priority: Line,
    pub categories: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodCopy {
    pub header: Line,
    pub banner: String,
    pub restaurants: Vec<Listing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesCopy {
    pub header: Line,
    pub categories: Vec<Line>,
    pub providers: Vec<Listing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileCopy {
    pub name: String,
    pub status: Vec<String>,
    pub progress_title: String,
    pub points: String,
    /// Fraction of the progress bar filled, 0.0..=1.0.
    pub progress: f32,
    pub achievements: Vec<Line>,
    pub next_level: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationCopy {
    pub header: Line,
    pub card_title: String,
    pub card_fields: Vec<String>,
    pub card_status: String,
    pub benefits_title: String,
    pub benefits: Vec<String>,
    pub button: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn line(title: &str, detail: &str) -> Line {
    Line {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn listing(name: &str, details: &[&str]) -> Listing {
    Listing {
        name: name.to_string(),
        details: strings(details),
    }
}

fn screen(title: &str, subtitle: &str, tagline: &str, features: &[&str]) -> ScreenCopy {
    ScreenCopy {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        tagline: tagline.to_string(),
        features: strings(features),
    }
}

impl Content {
    /// Copy for marketing screen `n`; unknown numbers fall back to the first screen.
    pub fn screen(&self, n: u32) -> &ScreenCopy {
        self.screens
            .get(&n)
            .or_else(|| self.screens.values().next())
            .unwrap_or(&FALLBACK_SCREEN)
    }

    /// Marketing screen numbers in order.
    pub fn screen_numbers(&self) -> Vec<u32> {
        self.screens.keys().copied().collect()
    }

    /// Check the content is usable by the templates.
    pub fn validate(&self) -> Result<()> {
        if self.screens.is_empty() {
            return Err(ArtError::Config {
                message: "content.screens is empty".to_string(),
                help: Some("Define at least one marketing screen".to_string()),
            });
        }
        if self.screens.contains_key(&0) {
            return Err(ArtError::Config {
                message: "content.screens uses screen number 0".to_string(),
                help: Some("Screen numbers start at 1".to_string()),
            });
        }
        if self.nav.is_empty() {
            return Err(ArtError::Config {
                message: "content.nav is empty".to_string(),
                help: Some("Define at least one bottom navigation label".to_string()),
            });
        }
        if !(0.0..=1.0).contains(&self.realistic.profile.progress) {
            return Err(ArtError::Config {
                message: format!(
                    "content.realistic.profile.progress must be between 0 and 1, got {}",
                    self.realistic.profile.progress
                ),
                help: None,
            });
        }
        Ok(())
    }
}

static FALLBACK_SCREEN: ScreenCopy = ScreenCopy {
    title: String::new(),
    subtitle: String::new(),
    tagline: String::new(),
    features: Vec::new(),
};

impl Default for Content {
    fn default() -> Self {
        let screens = [
            (
                1,
                screen(
                    "HomeLinkGH",
                    "Ghana's Smartest AI Platform",
                    "AI That Learns You, Services That Delight You",
                    &[
                        "AI Personalization",
                        "Gamification Rewards",
                        "Ghana Card Priority",
                        "9 Major Ghana Areas",
                    ],
                ),
            ),
            (
                2,
                screen(
                    "Food Delivery",
                    "Enhanced AI-Powered Ordering",
                    "10-minute response guarantee",
                    &[
                        "Smart restaurant recommendations",
                        "Dynamic menu customization",
                        "Real-time order tracking",
                        "Pre-order communication",
                    ],
                ),
            ),
            (
                3,
                screen(
                    "Home Services",
                    "Verified Professional Providers",
                    "Cleaning - Plumbing - Electrical - Beauty",
                    &[
                        "Ghana Card verified providers",
                        "Trust scores & ratings",
                        "Flexible scheduling",
                        "Emergency services available",
                    ],
                ),
            ),
            (
                4,
                screen(
                    "Gamification",
                    "Earn Points & Unlock Rewards",
                    "Level up with every service",
                    &[
                        "10+ Achievement badges",
                        "7 Progressive levels",
                        "Exclusive rewards",
                        "Streak bonuses",
                    ],
                ),
            ),
            (
                5,
                screen(
                    "Ghana Card Priority",
                    "Enhanced Trust & Benefits",
                    "Priority for all Ghanaians",
                    &[
                        "Priority service access",
                        "Diaspora connection",
                        "Enhanced trust score",
                        "Driver's license fallback",
                    ],
                ),
            ),
        ];

        Self {
            brand: "HomeLinkGH".to_string(),
            badge: "QUICK".to_string(),
            clock: "9:41".to_string(),
            battery: "100%".to_string(),
            screens: screens.into_iter().collect(),
            feature_graphic: FeatureCopy::default(),
            nav: strings(&["Home", "Food", "Rewards", "Profile"]),
            realistic: RealisticCopy::default(),
        }
    }
}

impl Default for FeatureCopy {
    fn default() -> Self {
        Self {
            subtitle: "Ghana's Smartest AI-Powered Services".to_string(),
            tagline: "AI That Learns You, Services That Delight You".to_string(),
            features: strings(&[
                "AI Personalization",
                "Gamification Rewards",
                "Ghana Card Priority",
                "Smart Recommendations",
            ]),
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        line("", "")
    }
}

impl Default for RealisticCopy {
    fn default() -> Self {
        Self {
            location: "Greater Accra, Ghana".to_string(),
            home: HomeCopy::default(),
            food: FoodCopy::default(),
            services: ServicesCopy::default(),
            profile: ProfileCopy::default(),
            verification: VerificationCopy::default(),
        }
    }
}

impl Default for HomeCopy {
    fn default() -> Self {
        Self {
            banner: line("AI Personalization Active", "Learning your preferences..."),
            priority: line("Ghana Card Priority", "Enhanced trust & benefits"),
            categories: vec![
                line("Food Delivery", "500+ restaurants"),
                line("Home Services", "Verified providers"),
                line("Grocery", "Fresh & local"),
                line("Beauty", "Professional artists"),
            ],
        }
    }
}

impl Default for FoodCopy {
    fn default() -> Self {
        let verified = "Ghana Card Verified";
        Self {
            header: line("Food Delivery", "Accra, Ghana"),
            banner: "AI Recommendations for You".to_string(),
            restaurants: vec![
                listing("KFC Ghana", &["Fast Food - 15 min", "4.8", verified]),
                listing("Pizza Hut", &["Italian - 20 min", "4.6", verified]),
                listing("Buka Restaurant", &["Local - 12 min", "4.9", verified]),
                listing("Chop Bar Central", &["Ghanaian - 18 min", "4.7", verified]),
            ],
        }
    }
}

impl Default for ServicesCopy {
    fn default() -> Self {
        let verified = "Ghana Card Verified";
        Self {
            header: line("Home Services", "Verified Providers"),
            categories: vec![
                line("Cleaning", "Available now"),
                line("Plumbing", "Emergency 24/7"),
                line("Electrical", "Licensed pros"),
                line("Beauty", "In-home service"),
            ],
            providers: vec![
                listing("Kwame Cleaning Services", &["4.9 - 50+ reviews", verified]),
                listing("Akosua Plumbing", &["4.8 - 120+ reviews", verified]),
                listing("Elite Beauty Services", &["4.7 - 89+ reviews", verified]),
            ],
        }
    }
}

impl Default for ProfileCopy {
    fn default() -> Self {
        Self {
            name: "Kofi Mensah".to_string(),
            status: strings(&["Ghana Card Verified", "Level 5 - Explorer"]),
            progress_title: "Your Progress".to_string(),
            points: "2,450 Points".to_string(),
            progress: 0.7,
            achievements: vec![
                line("First Order", "Completed"),
                line("5 Star Rating", "Achieved"),
                line("Weekly Streak", "7 days"),
                line("Ghana Card Pro", "Verified"),
            ],
            next_level: line("Next Level: Premium User", "550 more points needed"),
        }
    }
}

impl Default for VerificationCopy {
    fn default() -> Self {
        Self {
            header: line("Ghana Card Verification", "Priority Access System"),
            card_title: "GHANA CARD".to_string(),
            card_fields: strings(&[
                "Name: KOFI MENSAH",
                "ID: GHA-123456789-0",
                "Date of Birth: 15/03/1990",
            ]),
            card_status: "Status: VERIFIED".to_string(),
            benefits_title: "Your Benefits:".to_string(),
            benefits: strings(&[
                "Priority service access",
                "Diaspora connection benefits",
                "Enhanced trust score",
                "Faster booking process",
            ]),
            button: "Update Verification".to_string(),
        }
    }
}
