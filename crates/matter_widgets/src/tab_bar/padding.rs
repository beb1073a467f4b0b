//! Per-layout-style content padding

use matter_core::EdgeInsets;
use rustc_hash::FxHashMap;

use super::layout::LayoutStyle;

/// Leading inset of scrollable bars, clearing the first item from the edge
pub const SCROLLABLE_LEADING_PADDING: f32 = 52.0;

/// Content padding for every layout style.
///
/// Values are stored in leading/trailing terms: `left` is the leading edge.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddingTable {
    overrides: FxHashMap<LayoutStyle, EdgeInsets>,
}

impl PaddingTable {
    pub fn new() -> Self {
        Self {
            overrides: FxHashMap::default(),
        }
    }

    /// Built-in padding for a style
    pub fn default_for(style: LayoutStyle) -> EdgeInsets {
        match style {
            LayoutStyle::Scrollable => EdgeInsets::new(0.0, SCROLLABLE_LEADING_PADDING, 0.0, 0.0),
            _ => EdgeInsets::ZERO,
        }
    }

    /// Padding for `style`, defaulted when never set
    pub fn get(&self, style: LayoutStyle) -> EdgeInsets {
        self.overrides
            .get(&style)
            .copied()
            .unwrap_or_else(|| Self::default_for(style))
    }

    pub fn set(&mut self, style: LayoutStyle, padding: EdgeInsets) {
        self.overrides.insert(style, padding);
    }
}

impl Default for PaddingTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_total() {
        let table = PaddingTable::new();
        for style in LayoutStyle::ALL {
            let expected = if style == LayoutStyle::Scrollable {
                EdgeInsets::new(0.0, 52.0, 0.0, 0.0)
            } else {
                EdgeInsets::ZERO
            };
            assert_eq!(table.get(style), expected);
        }
    }

    #[test]
    fn test_set_is_per_style() {
        let mut table = PaddingTable::new();
        let custom = EdgeInsets::symmetric(4.0, 12.0);
        table.set(LayoutStyle::Fixed, custom);
        assert_eq!(table.get(LayoutStyle::Fixed), custom);
        assert_eq!(table.get(LayoutStyle::FixedClusteredLeading), EdgeInsets::ZERO);
    }
}
