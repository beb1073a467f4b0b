//! Semantic color schemes
//!
//! [`ColorScheming`] is the read-only view components theme themselves
//! from. [`SemanticColorScheme`] is the standard mutable implementation,
//! seeded from one of the Material default sets.

use matter_core::Color;
use serde::Deserialize;

use crate::tokens::{ColorPalette, ColorToken, UserInterfaceStyle};

/// Read-only access to the semantic colors of a scheme
pub trait ColorScheming {
    fn primary_color(&self) -> Color;
    fn primary_color_variant(&self) -> Color;
    fn secondary_color(&self) -> Color;
    fn error_color(&self) -> Color;
    fn surface_color(&self) -> Color;
    fn background_color(&self) -> Color;
    fn on_primary_color(&self) -> Color;
    fn on_secondary_color(&self) -> Color;
    fn on_surface_color(&self) -> Color;
    fn on_background_color(&self) -> Color;

    /// Color blended onto elevated surfaces in dark mode
    fn elevation_overlay_color(&self) -> Color;

    /// Whether elevated surfaces get the overlay in dark mode
    fn elevation_overlay_enabled_for_dark(&self) -> bool;

    /// Look a color up by token
    fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary_color(),
            ColorToken::PrimaryVariant => self.primary_color_variant(),
            ColorToken::Secondary => self.secondary_color(),
            ColorToken::Error => self.error_color(),
            ColorToken::Surface => self.surface_color(),
            ColorToken::Background => self.background_color(),
            ColorToken::OnPrimary => self.on_primary_color(),
            ColorToken::OnSecondary => self.on_secondary_color(),
            ColorToken::OnSurface => self.on_surface_color(),
            ColorToken::OnBackground => self.on_background_color(),
            ColorToken::ElevationOverlay => self.elevation_overlay_color(),
        }
    }
}

/// Versioned Material default color sets
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
pub enum ColorSchemeDefaults {
    /// Baseline light palette; ignores the interface style
    #[default]
    #[serde(rename = "material_2018_04")]
    Material201804,
    /// Baseline palette with a dark variant and dark elevation overlays
    #[serde(rename = "material_2019_07")]
    Material201907,
}

impl ColorSchemeDefaults {
    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Material201804 => "material_2018_04",
            Self::Material201907 => "material_2019_07",
        }
    }
}

/// Mutable color scheme seeded from a default set
#[derive(Clone, Debug, PartialEq)]
pub struct SemanticColorScheme {
    palette: ColorPalette,
    elevation_overlay_enabled_for_dark: bool,
}

impl SemanticColorScheme {
    /// Light scheme for a default set
    pub fn new(defaults: ColorSchemeDefaults) -> Self {
        Self::with_style(defaults, UserInterfaceStyle::Light)
    }

    /// Scheme for a default set as rendered in the given interface style
    pub fn with_style(defaults: ColorSchemeDefaults, style: UserInterfaceStyle) -> Self {
        match (defaults, style) {
            (ColorSchemeDefaults::Material201804, _) => Self {
                palette: ColorPalette::baseline_light(),
                elevation_overlay_enabled_for_dark: false,
            },
            (ColorSchemeDefaults::Material201907, UserInterfaceStyle::Light) => Self {
                palette: ColorPalette::baseline_light(),
                elevation_overlay_enabled_for_dark: true,
            },
            (ColorSchemeDefaults::Material201907, UserInterfaceStyle::Dark) => Self {
                palette: ColorPalette::baseline_dark(),
                elevation_overlay_enabled_for_dark: true,
            },
        }
    }

    /// Build a scheme from an explicit palette
    pub fn from_palette(palette: ColorPalette, elevation_overlay_enabled_for_dark: bool) -> Self {
        Self {
            palette,
            elevation_overlay_enabled_for_dark,
        }
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Override one semantic color
    pub fn set_color(&mut self, token: ColorToken, color: Color) {
        self.palette.set(token, color);
    }

    pub fn set_elevation_overlay_enabled_for_dark(&mut self, enabled: bool) {
        self.elevation_overlay_enabled_for_dark = enabled;
    }
}

impl Default for SemanticColorScheme {
    fn default() -> Self {
        Self::new(ColorSchemeDefaults::default())
    }
}

impl ColorScheming for SemanticColorScheme {
    fn primary_color(&self) -> Color {
        self.palette.primary
    }

    fn primary_color_variant(&self) -> Color {
        self.palette.primary_variant
    }

    fn secondary_color(&self) -> Color {
        self.palette.secondary
    }

    fn error_color(&self) -> Color {
        self.palette.error
    }

    fn surface_color(&self) -> Color {
        self.palette.surface
    }

    fn background_color(&self) -> Color {
        self.palette.background
    }

    fn on_primary_color(&self) -> Color {
        self.palette.on_primary
    }

    fn on_secondary_color(&self) -> Color {
        self.palette.on_secondary
    }

    fn on_surface_color(&self) -> Color {
        self.palette.on_surface
    }

    fn on_background_color(&self) -> Color {
        self.palette.on_background
    }

    fn elevation_overlay_color(&self) -> Color {
        self.palette.elevation_overlay
    }

    fn elevation_overlay_enabled_for_dark(&self) -> bool {
        self.elevation_overlay_enabled_for_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2018_ignores_dark_style() {
        let light = SemanticColorScheme::new(ColorSchemeDefaults::Material201804);
        let dark =
            SemanticColorScheme::with_style(ColorSchemeDefaults::Material201804, UserInterfaceStyle::Dark);
        assert_eq!(light, dark);
        assert!(!light.elevation_overlay_enabled_for_dark());
    }

    #[test]
    fn test_token_lookup_matches_accessors() {
        let scheme = SemanticColorScheme::default();
        assert_eq!(scheme.color(ColorToken::Primary), scheme.primary_color());
        assert_eq!(scheme.color(ColorToken::OnSecondary), scheme.on_secondary_color());
        for token in ColorToken::all() {
            assert_eq!(scheme.color(*token), scheme.palette().get(*token), "{token:?}");
        }
    }

    #[test]
    fn test_set_color() {
        let mut scheme = SemanticColorScheme::default();
        scheme.set_color(ColorToken::Secondary, Color::RED);
        assert_eq!(scheme.secondary_color(), Color::RED);
        assert_eq!(scheme.primary_color(), ColorPalette::baseline_light().primary);
    }
}
