//! Brand palette: named colours fixed for the lifetime of a run.

use std::collections::BTreeMap;

use crate::error::{ArtError, Result};

use super::Colour;

/// Semantic colour names understood by the templates.
pub mod names {
    pub const PRIMARY: &str = "primary";
    pub const PRIMARY_LIGHT: &str = "primary-light";
    pub const ACCENT: &str = "accent";
    pub const FLAG_STRIPE_1: &str = "flag-stripe-1";
    pub const FLAG_STRIPE_2: &str = "flag-stripe-2";
    pub const FLAG_STRIPE_3: &str = "flag-stripe-3";
    pub const WHITE: &str = "white";
    pub const INK: &str = "ink";
    pub const SURFACE: &str = "surface";
    pub const FRAME: &str = "frame";
    pub const WINDOW: &str = "window";
    pub const TRACK: &str = "track";
    pub const STAR: &str = "star";
}

/// A named colour table.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    colours: BTreeMap<String, Colour>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colours: BTreeMap::new(),
        }
    }

    /// The builtin brand palette.
    pub fn brand() -> Self {
        let mut palette = Self::new("brand");
        let entries = [
            (names::PRIMARY, Colour::rgb(46, 139, 87)),
            (names::PRIMARY_LIGHT, Colour::rgb(60, 179, 113)),
            (names::ACCENT, Colour::rgb(255, 107, 53)),
            (names::FLAG_STRIPE_1, Colour::rgb(206, 17, 38)),
            (names::FLAG_STRIPE_2, Colour::rgb(252, 209, 22)),
            (names::FLAG_STRIPE_3, Colour::rgb(0, 107, 60)),
            (names::WHITE, Colour::WHITE),
            (names::INK, Colour::rgb(33, 33, 33)),
            (names::SURFACE, Colour::rgb(248, 249, 250)),
            (names::FRAME, Colour::rgb(20, 20, 20)),
            (names::WINDOW, Colour::rgb(173, 216, 230)),
            (names::TRACK, Colour::rgb(200, 200, 200)),
            (names::STAR, Colour::BLACK),
        ];
        for (name, colour) in entries {
            palette.colours.insert(name.to_string(), colour);
        }
        palette
    }

    /// Apply hex overrides on top of this palette.
    ///
    /// Only names already present may be overridden.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<Self> {
        for (name, value) in overrides {
            let name = name.strip_prefix('$').unwrap_or(name);
            if !self.colours.contains_key(name) {
                return Err(ArtError::Config {
                    message: format!("Unknown palette colour: {}", name),
                    help: Some(format!(
                        "Known colours: {}",
                        self.colour_names().collect::<Vec<_>>().join(", ")
                    )),
                });
            }
            let colour = Colour::from_hex(value)?;
            self.colours.insert(name.to_string(), colour);
        }
        Ok(self)
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        // Strip $ prefix if present
        let name = name.strip_prefix('$').unwrap_or(name);
        self.colours.get(name).copied()
    }

    /// Get a colour by name, magenta when missing.
    pub fn colour(&self, name: &str) -> Colour {
        self.get(name).unwrap_or(Colour::MAGENTA)
    }

    /// Get all colour names in sorted order.
    pub fn colour_names(&self) -> impl Iterator<Item = &str> {
        self.colours.keys().map(|s| s.as_str())
    }

    /// Iterate `(name, colour)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.colours.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::brand()
    }
}
