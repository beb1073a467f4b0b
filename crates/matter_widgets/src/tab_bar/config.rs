//! Tab bar configuration loaded from TOML
//!
//! ```toml
//! preferred_layout_style = "fixed_clustered_centered"
//! min_item_width = 72.0
//!
//! [padding.scrollable]
//! left = 40.0
//! ```

use matter_core::{EdgeInsets, LayoutDirection};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::layout::LayoutStyle;
use super::TabBarView;
use crate::error::Result;

/// Settings applied onto an existing [`TabBarView`]; absent keys leave the
/// bar unchanged
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabBarConfig {
    pub preferred_layout_style: Option<LayoutStyle>,
    pub min_item_width: Option<f32>,
    pub item_view_content_insets: Option<EdgeInsets>,
    pub should_adjust_for_safe_area_insets: Option<bool>,
    pub layout_direction: Option<LayoutDirection>,
    pub padding: FxHashMap<LayoutStyle, EdgeInsets>,
}

impl TabBarConfig {
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Apply every present setting, validating geometry first
    pub fn apply(&self, bar: &mut TabBarView) -> Result<()> {
        tracing::debug!("TabBarConfig::apply - {:?}", self);
        if let Some(width) = self.min_item_width {
            bar.set_min_item_width(width)?;
        }
        if let Some(insets) = self.item_view_content_insets {
            bar.set_item_view_content_insets(Some(insets))?;
        }
        for (style, padding) in &self.padding {
            bar.set_content_padding(*padding, *style)?;
        }
        if let Some(adjust) = self.should_adjust_for_safe_area_insets {
            bar.set_should_adjust_for_safe_area_insets(adjust);
        }
        if let Some(direction) = self.layout_direction {
            bar.set_layout_direction(direction);
        }
        if let Some(style) = self.preferred_layout_style {
            bar.set_preferred_layout_style(style);
        }
        Ok(())
    }
}
