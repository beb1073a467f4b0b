//! Color scheme configuration files
//!
//! ```toml
//! base = "material_2019_07"
//! style = "dark"
//!
//! [colors]
//! secondary = "#018786"
//! on_secondary = "#FFFFFF"
//! ```

use std::collections::BTreeMap;

use matter_core::Color;
use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::scheme::{ColorSchemeDefaults, SemanticColorScheme};
use crate::tokens::{ColorToken, UserInterfaceStyle};

/// Deserialized scheme configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemeConfig {
    /// Default set the scheme starts from
    pub base: ColorSchemeDefaults,
    /// Interface style used to pick the base palette
    pub style: UserInterfaceStyle,
    /// Overrides the default set's overlay flag when present
    pub elevation_overlay_enabled_for_dark: Option<bool>,
    /// Token key -> hex color
    pub colors: BTreeMap<String, String>,
}

impl SchemeConfig {
    /// Parse a scheme config from TOML text
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Build the scheme described by this config
    pub fn build(&self) -> Result<SemanticColorScheme> {
        let mut scheme = SemanticColorScheme::with_style(self.base, self.style);
        if let Some(enabled) = self.elevation_overlay_enabled_for_dark {
            scheme.set_elevation_overlay_enabled_for_dark(enabled);
        }

        for (key, value) in &self.colors {
            let token = ColorToken::all()
                .iter()
                .copied()
                .find(|token| token.key() == key)
                .ok_or_else(|| ThemeError::UnknownToken(key.clone()))?;
            let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                field: key.clone(),
                value: value.clone(),
            })?;
            scheme.set_color(token, color);
        }

        tracing::debug!(
            "SchemeConfig::build - base={} style={:?} overrides={}",
            self.base.id(),
            self.style,
            self.colors.len()
        );
        Ok(scheme)
    }
}

impl SemanticColorScheme {
    /// Parse and build a scheme from TOML text
    pub fn from_toml(input: &str) -> Result<Self> {
        SchemeConfig::from_toml(input)?.build()
    }
}
