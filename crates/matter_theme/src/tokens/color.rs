//! Color tokens for theming

use matter_core::Color;
use serde::Deserialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryVariant,
    Secondary,
    Error,

    // Surface colors
    Surface,
    Background,

    // Content colors
    OnPrimary,
    OnSecondary,
    OnSurface,
    OnBackground,

    // Elevation
    ElevationOverlay,
}

impl ColorToken {
    /// All tokens, in declaration order
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 11] = [
            ColorToken::Primary,
            ColorToken::PrimaryVariant,
            ColorToken::Secondary,
            ColorToken::Error,
            ColorToken::Surface,
            ColorToken::Background,
            ColorToken::OnPrimary,
            ColorToken::OnSecondary,
            ColorToken::OnSurface,
            ColorToken::OnBackground,
            ColorToken::ElevationOverlay,
        ];
        &TOKENS
    }

    /// Stable snake_case key, as used in config files
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryVariant => "primary_variant",
            ColorToken::Secondary => "secondary",
            ColorToken::Error => "error",
            ColorToken::Surface => "surface",
            ColorToken::Background => "background",
            ColorToken::OnPrimary => "on_primary",
            ColorToken::OnSecondary => "on_secondary",
            ColorToken::OnSurface => "on_surface",
            ColorToken::OnBackground => "on_background",
            ColorToken::ElevationOverlay => "elevation_overlay",
        }
    }
}

/// Light or dark rendering of the host
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInterfaceStyle {
    #[default]
    Light,
    Dark,
}

/// Raw palette backing a semantic color scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub error: Color,
    pub surface: Color,
    pub background: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_surface: Color,
    pub on_background: Color,
    pub elevation_overlay: Color,
}

impl ColorPalette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryVariant => self.primary_variant,
            ColorToken::Secondary => self.secondary,
            ColorToken::Error => self.error,
            ColorToken::Surface => self.surface,
            ColorToken::Background => self.background,
            ColorToken::OnPrimary => self.on_primary,
            ColorToken::OnSecondary => self.on_secondary,
            ColorToken::OnSurface => self.on_surface,
            ColorToken::OnBackground => self.on_background,
            ColorToken::ElevationOverlay => self.elevation_overlay,
        }
    }

    /// Replace a single color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryVariant => &mut self.primary_variant,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::Error => &mut self.error,
            ColorToken::Surface => &mut self.surface,
            ColorToken::Background => &mut self.background,
            ColorToken::OnPrimary => &mut self.on_primary,
            ColorToken::OnSecondary => &mut self.on_secondary,
            ColorToken::OnSurface => &mut self.on_surface,
            ColorToken::OnBackground => &mut self.on_background,
            ColorToken::ElevationOverlay => &mut self.elevation_overlay,
        };
        *slot = color;
    }
}

/// Material baseline light palette (2018-04)
pub mod baseline_light {
    use matter_core::Color;

    pub const PRIMARY: Color = Color::rgb(98.0 / 255.0, 0.0, 238.0 / 255.0);
    pub const PRIMARY_VARIANT: Color = Color::rgb(55.0 / 255.0, 0.0, 179.0 / 255.0);
    pub const SECONDARY: Color = Color::rgb(3.0 / 255.0, 218.0 / 255.0, 198.0 / 255.0);
    pub const ERROR: Color = Color::rgb(176.0 / 255.0, 0.0, 32.0 / 255.0);
    pub const SURFACE: Color = Color::WHITE;
    pub const BACKGROUND: Color = Color::WHITE;
    pub const ON_PRIMARY: Color = Color::WHITE;
    pub const ON_SECONDARY: Color = Color::BLACK;
    pub const ON_SURFACE: Color = Color::BLACK;
    pub const ON_BACKGROUND: Color = Color::BLACK;
}

/// Material baseline dark palette (2019-07)
pub mod baseline_dark {
    use matter_core::Color;

    pub const PRIMARY: Color = Color::rgb(187.0 / 255.0, 134.0 / 255.0, 252.0 / 255.0);
    pub const PRIMARY_VARIANT: Color = Color::rgb(55.0 / 255.0, 0.0, 179.0 / 255.0);
    pub const SECONDARY: Color = Color::rgb(3.0 / 255.0, 218.0 / 255.0, 198.0 / 255.0);
    pub const ERROR: Color = Color::rgb(207.0 / 255.0, 102.0 / 255.0, 121.0 / 255.0);
    pub const SURFACE: Color = Color::rgb(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0);
    pub const BACKGROUND: Color = Color::rgb(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0);
    pub const ON_PRIMARY: Color = Color::BLACK;
    pub const ON_SECONDARY: Color = Color::BLACK;
    pub const ON_SURFACE: Color = Color::WHITE;
    pub const ON_BACKGROUND: Color = Color::WHITE;
}

impl ColorPalette {
    pub const fn baseline_light() -> Self {
        use baseline_light::*;
        Self {
            primary: PRIMARY,
            primary_variant: PRIMARY_VARIANT,
            secondary: SECONDARY,
            error: ERROR,
            surface: SURFACE,
            background: BACKGROUND,
            on_primary: ON_PRIMARY,
            on_secondary: ON_SECONDARY,
            on_surface: ON_SURFACE,
            on_background: ON_BACKGROUND,
            elevation_overlay: ON_SURFACE,
        }
    }

    pub const fn baseline_dark() -> Self {
        use baseline_dark::*;
        Self {
            primary: PRIMARY,
            primary_variant: PRIMARY_VARIANT,
            secondary: SECONDARY,
            error: ERROR,
            surface: SURFACE,
            background: BACKGROUND,
            on_primary: ON_PRIMARY,
            on_secondary: ON_SECONDARY,
            on_surface: ON_SURFACE,
            on_background: ON_BACKGROUND,
            elevation_overlay: ON_SURFACE,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::baseline_light()
    }
}
