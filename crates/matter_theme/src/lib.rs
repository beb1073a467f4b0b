//! Matter Theme System
//!
//! Design tokens and semantic color schemes that components theme
//! themselves from.
//!
//! # Overview
//!
//! - **Color schemes**: [`ColorScheming`] trait and the standard
//!   [`SemanticColorScheme`], seeded from versioned Material defaults
//! - **Typography**: [`Font`] descriptions and the [`TypographyScheme`]
//! - **Opacity**: emphasis and state alphas ([`OpacityTokens`])
//! - **Configuration**: schemes loaded from TOML ([`SchemeConfig`])
//!
//! # Quick Start
//!
//! ```rust
//! use matter_theme::{ColorScheming, ColorSchemeDefaults, SemanticColorScheme};
//!
//! let scheme = SemanticColorScheme::new(ColorSchemeDefaults::Material201804);
//! let secondary = scheme.secondary_color();
//! # let _ = secondary;
//! ```

pub mod config;
pub mod error;
pub mod scheme;
pub mod tokens;

pub use config::SchemeConfig;
pub use error::{Result, ThemeError};
pub use scheme::{ColorSchemeDefaults, ColorScheming, SemanticColorScheme};
pub use tokens::*;
