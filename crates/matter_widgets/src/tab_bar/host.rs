//! Collaborators of a tab bar
//!
//! The bar never renders, scrolls, or talks to assistive technologies
//! itself. It asks a [`TabBarHost`] to do so and reports user selection to
//! an optional [`TabBarDelegate`].

use matter_core::{Color, Rect};
use matter_theme::{Font, TypographyScheme};

use super::item::TabBarItem;
use super::TabBarView;

/// Shared look of item badges
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeAppearance {
    pub background_color: Color,
    pub text_color: Color,
    pub font: Font,
}

impl Default for BadgeAppearance {
    fn default() -> Self {
        Self {
            background_color: Color::from_hex(0xB00020),
            text_color: Color::WHITE,
            font: TypographyScheme::default().caption,
        }
    }
}

/// Description of one item for assistive technologies
#[derive(Clone, Debug, PartialEq)]
pub struct AccessibilityElement {
    pub label: String,
    /// Frame in bar coordinates
    pub frame: Rect,
    pub is_selected: bool,
    /// Position among the bar's items
    pub index: usize,
    pub count: usize,
}

/// Rendering, scrolling, and accessibility services provided by the host
pub trait TabBarHost {
    /// Geometry changed; the host should lay the bar out again
    fn set_needs_layout(&self);

    /// Colors or selection changed; the host should redraw
    fn set_needs_display(&self);

    /// Scroll so that `rect`, in content coordinates, is visible
    fn scroll_to_rect(&self, rect: Rect, animated: bool);

    fn materialize_accessibility_element(&self, element: &AccessibilityElement);

    /// Draw a badge on the item at `index`
    fn render_badge(&self, index: usize, value: &str, appearance: &BadgeAppearance);
}

/// Observer of user-driven selection
///
/// The bar holds delegates weakly and never extends their lifetime.
pub trait TabBarDelegate {
    /// Asked before a tapped item becomes selected
    fn should_select_item(&self, _tab_bar: &TabBarView, _item: &TabBarItem) -> bool {
        true
    }

    /// Told after a tapped item became selected
    fn did_select_item(&self, _tab_bar: &TabBarView, _item: &TabBarItem) {}
}
