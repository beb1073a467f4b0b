//! Design tokens for theming
//!
//! Tokens are the atomic values of the design system:
//! - Colors (semantic palette entries)
//! - Typography (fonts, sizes, weights)
//! - Opacity (emphasis and state alphas)

mod color;
mod opacity;
mod typography;

pub use color::*;
pub use opacity::*;
pub use typography::*;
