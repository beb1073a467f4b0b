//! Typography tokens for theming

use serde::Deserialize;

/// Font weight on the usual 100..900 scale
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    /// Numeric weight
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

/// A font description: family, point size, and weight
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Font {
    /// Family name; `None` selects the platform system font
    #[serde(default)]
    pub family: Option<String>,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    /// Platform system font
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            family: None,
            size,
            weight,
        }
    }

    /// A named font family
    pub fn named(family: impl Into<String>, size: f32, weight: FontWeight) -> Self {
        Self {
            family: Some(family.into()),
            size,
            weight,
        }
    }

    /// Same font at another size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Semantic type scale (Material 2018 naming)
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyScheme {
    pub subtitle1: Font,
    pub body1: Font,
    pub body2: Font,
    pub button: Font,
    pub caption: Font,
    pub overline: Font,
}

impl Default for TypographyScheme {
    fn default() -> Self {
        Self {
            subtitle1: Font::system(16.0, FontWeight::Regular),
            body1: Font::system(16.0, FontWeight::Regular),
            body2: Font::system(14.0, FontWeight::Regular),
            button: Font::system(14.0, FontWeight::Medium),
            caption: Font::system(12.0, FontWeight::Regular),
            overline: Font::system(10.0, FontWeight::Regular),
        }
    }
}
