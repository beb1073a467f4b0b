//! Layout style resolution and item placement
//!
//! [`LayoutStyleResolver`] decides which style a bar actually renders.
//! A preferred style that cannot fit degrades to a scrollable one; this is
//! never an error. [`place_items`] turns the effective style into item
//! frames in content coordinates.

use matter_core::{EdgeInsets, LayoutDirection, Rect, Size};
use serde::Deserialize;

/// Arrangement of items across the bar
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Items share the bar width equally
    #[default]
    Fixed,
    /// Items keep their own width and the content scrolls
    Scrollable,
    /// Equal-width items grouped at the center
    FixedClusteredCentered,
    /// Equal-width items grouped at the leading edge
    FixedClusteredLeading,
    /// Equal-width items grouped at the trailing edge
    FixedClusteredTrailing,
    /// Scrollable, with the selected item kept centered
    ScrollableCentered,
    /// Natural-width items grouped at the center
    NonFixedClusteredCentered,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 7] = [
        LayoutStyle::Fixed,
        LayoutStyle::Scrollable,
        LayoutStyle::FixedClusteredCentered,
        LayoutStyle::FixedClusteredLeading,
        LayoutStyle::FixedClusteredTrailing,
        LayoutStyle::ScrollableCentered,
        LayoutStyle::NonFixedClusteredCentered,
    ];

    pub fn is_scrollable(self) -> bool {
        matches!(
            self,
            LayoutStyle::Scrollable | LayoutStyle::ScrollableCentered
        )
    }
}

/// Width requirements of one item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemMetrics {
    /// Width of the item's content including its content insets
    pub intrinsic_width: f32,
    /// Custom views opt out of the bar minimum
    pub respects_min_width: bool,
}

impl ItemMetrics {
    pub fn new(intrinsic_width: f32) -> Self {
        Self {
            intrinsic_width,
            respects_min_width: true,
        }
    }

    pub fn custom(intrinsic_width: f32) -> Self {
        Self {
            intrinsic_width,
            respects_min_width: false,
        }
    }

    /// Width the item needs in a fixed layout
    pub fn required_width(&self, min_item_width: f32) -> f32 {
        if self.respects_min_width {
            self.intrinsic_width.max(min_item_width)
        } else {
            self.intrinsic_width
        }
    }
}

/// Pure mapping from preferred style to effective style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutStyleResolver {
    pub min_item_width: f32,
}

impl Default for LayoutStyleResolver {
    fn default() -> Self {
        Self {
            min_item_width: DEFAULT_MIN_ITEM_WIDTH,
        }
    }
}

/// Minimum width of a plain item
pub const DEFAULT_MIN_ITEM_WIDTH: f32 = 90.0;

impl LayoutStyleResolver {
    pub fn new(min_item_width: f32) -> Self {
        Self { min_item_width }
    }

    /// Width of each item in a fixed cluster
    pub fn cluster_item_width(&self, items: &[ItemMetrics]) -> f32 {
        items
            .iter()
            .map(|item| item.intrinsic_width)
            .fold(self.min_item_width, f32::max)
    }

    /// Resolve the style to render for `items` in `available_width`
    pub fn resolve(
        &self,
        preferred: LayoutStyle,
        items: &[ItemMetrics],
        available_width: f32,
    ) -> LayoutStyle {
        if items.is_empty() {
            return preferred;
        }
        let count = items.len() as f32;

        let effective = match preferred {
            LayoutStyle::Fixed => {
                let share = available_width / count;
                let fits = items
                    .iter()
                    .all(|item| share >= item.required_width(self.min_item_width));
                if fits {
                    LayoutStyle::Fixed
                } else {
                    LayoutStyle::Scrollable
                }
            }
            LayoutStyle::FixedClusteredCentered
            | LayoutStyle::FixedClusteredLeading
            | LayoutStyle::FixedClusteredTrailing => {
                if count * self.cluster_item_width(items) > available_width {
                    match preferred {
                        LayoutStyle::FixedClusteredCentered => LayoutStyle::ScrollableCentered,
                        _ => LayoutStyle::Scrollable,
                    }
                } else {
                    preferred
                }
            }
            LayoutStyle::Scrollable
            | LayoutStyle::ScrollableCentered
            | LayoutStyle::NonFixedClusteredCentered => preferred,
        };

        if effective != preferred {
            tracing::debug!(
                "LayoutStyleResolver::resolve - {:?} degraded to {:?} ({} items, {} available)",
                preferred,
                effective,
                items.len(),
                available_width
            );
        }
        effective
    }
}

/// Item frames for one layout pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Item frames in content coordinates, in item order
    pub frames: Vec<Rect>,
    /// Size of the scrollable content
    pub content_size: Size,
}

/// Place items for `style` inside a region of `bounds` size.
///
/// `padding` is in leading/trailing terms (left is leading); frames are
/// mirrored afterwards for right-to-left layouts.
pub fn place_items(
    style: LayoutStyle,
    items: &[ItemMetrics],
    bounds: Size,
    padding: EdgeInsets,
    min_item_width: f32,
    direction: LayoutDirection,
) -> Placement {
    let available = (bounds.width - padding.horizontal()).max(0.0);
    let height = (bounds.height - padding.vertical()).max(0.0);
    let mut placement = Placement {
        frames: Vec::with_capacity(items.len()),
        content_size: bounds,
    };
    if items.is_empty() {
        return placement;
    }

    let count = items.len() as f32;
    let widths: Vec<f32> = match style {
        LayoutStyle::Fixed => vec![available / count; items.len()],
        LayoutStyle::FixedClusteredCentered
        | LayoutStyle::FixedClusteredLeading
        | LayoutStyle::FixedClusteredTrailing => {
            let width = LayoutStyleResolver::new(min_item_width).cluster_item_width(items);
            vec![width; items.len()]
        }
        LayoutStyle::Scrollable
        | LayoutStyle::ScrollableCentered
        | LayoutStyle::NonFixedClusteredCentered => items
            .iter()
            .map(|item| item.required_width(min_item_width))
            .collect(),
    };
    let total: f32 = widths.iter().sum();
    let slack = (available - total).max(0.0);

    let start = padding.left
        + match style {
            LayoutStyle::FixedClusteredCentered | LayoutStyle::NonFixedClusteredCentered => {
                slack / 2.0
            }
            LayoutStyle::FixedClusteredTrailing => slack,
            _ => 0.0,
        };

    let mut x = start;
    for width in widths {
        placement
            .frames
            .push(Rect::new(x, padding.top, width, height));
        x += width;
    }

    let content_width = bounds.width.max(x + padding.right);
    placement.content_size = Size::new(content_width, bounds.height);

    if direction == LayoutDirection::RightToLeft {
        for frame in &mut placement.frames {
            *frame = frame.mirrored(content_width);
        }
    }
    placement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(count: usize, width: f32) -> Vec<ItemMetrics> {
        vec![ItemMetrics::new(width); count]
    }

    #[test]
    fn test_fixed_degrades_when_share_too_small() {
        let resolver = LayoutStyleResolver::default();
        let items = plain(5, 40.0);
        assert_eq!(
            resolver.resolve(LayoutStyle::Fixed, &items, 300.0),
            LayoutStyle::Scrollable
        );
        assert_eq!(
            resolver.resolve(LayoutStyle::Fixed, &items, 600.0),
            LayoutStyle::Fixed
        );
    }

    #[test]
    fn test_fixed_share_exactly_minimum_fits() {
        let resolver = LayoutStyleResolver::default();
        assert_eq!(
            resolver.resolve(LayoutStyle::Fixed, &plain(4, 10.0), 360.0),
            LayoutStyle::Fixed
        );
    }

    #[test]
    fn test_custom_views_ignore_minimum() {
        let resolver = LayoutStyleResolver::default();
        let items = vec![ItemMetrics::custom(50.0); 5];
        assert_eq!(
            resolver.resolve(LayoutStyle::Fixed, &items, 300.0),
            LayoutStyle::Fixed
        );
    }

    #[test]
    fn test_clustered_degrade_targets() {
        let resolver = LayoutStyleResolver::default();
        let items = plain(3, 120.0);
        assert_eq!(
            resolver.resolve(LayoutStyle::FixedClusteredCentered, &items, 300.0),
            LayoutStyle::ScrollableCentered
        );
        assert_eq!(
            resolver.resolve(LayoutStyle::FixedClusteredLeading, &items, 300.0),
            LayoutStyle::Scrollable
        );
        assert_eq!(
            resolver.resolve(LayoutStyle::FixedClusteredTrailing, &items, 300.0),
            LayoutStyle::Scrollable
        );
        assert_eq!(
            resolver.resolve(LayoutStyle::FixedClusteredTrailing, &items, 360.0),
            LayoutStyle::FixedClusteredTrailing
        );
    }

    #[test]
    fn test_other_styles_pass_through() {
        let resolver = LayoutStyleResolver::default();
        let items = plain(10, 200.0);
        for style in [
            LayoutStyle::Scrollable,
            LayoutStyle::ScrollableCentered,
            LayoutStyle::NonFixedClusteredCentered,
        ] {
            assert_eq!(resolver.resolve(style, &items, 100.0), style);
        }
    }

    #[test]
    fn test_zero_items_keeps_preferred() {
        let resolver = LayoutStyleResolver::default();
        for style in LayoutStyle::ALL {
            assert_eq!(resolver.resolve(style, &[], 0.0), style);
        }
    }

    #[test]
    fn test_fixed_placement_splits_evenly() {
        let placement = place_items(
            LayoutStyle::Fixed,
            &plain(4, 10.0),
            Size::new(400.0, 48.0),
            EdgeInsets::ZERO,
            90.0,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(placement.frames[1], Rect::new(100.0, 0.0, 100.0, 48.0));
        assert_eq!(placement.content_size, Size::new(400.0, 48.0));
    }

    #[test]
    fn test_scrollable_placement_grows_content() {
        let padding = EdgeInsets::new(0.0, 52.0, 0.0, 0.0);
        let placement = place_items(
            LayoutStyle::Scrollable,
            &plain(5, 40.0),
            Size::new(300.0, 48.0),
            padding,
            90.0,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(placement.frames[0].x(), 52.0);
        assert_eq!(placement.frames[4].max_x(), 52.0 + 450.0);
        assert_eq!(placement.content_size.width, 502.0);
    }

    #[test]
    fn test_clustered_trailing_and_rtl_mirroring() {
        let items = plain(2, 10.0);
        let bounds = Size::new(400.0, 48.0);
        let ltr = place_items(
            LayoutStyle::FixedClusteredTrailing,
            &items,
            bounds,
            EdgeInsets::ZERO,
            90.0,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(ltr.frames[0].x(), 220.0);

        let rtl = place_items(
            LayoutStyle::FixedClusteredTrailing,
            &items,
            bounds,
            EdgeInsets::ZERO,
            90.0,
            LayoutDirection::RightToLeft,
        );
        assert_eq!(rtl.frames[0], Rect::new(90.0, 0.0, 90.0, 48.0));
        assert_eq!(rtl.frames[1].x(), 0.0);
    }

    #[test]
    fn test_non_fixed_centered_uses_natural_widths() {
        let items = vec![ItemMetrics::new(100.0), ItemMetrics::new(140.0)];
        let placement = place_items(
            LayoutStyle::NonFixedClusteredCentered,
            &items,
            Size::new(440.0, 48.0),
            EdgeInsets::ZERO,
            90.0,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(placement.frames[0], Rect::new(100.0, 0.0, 100.0, 48.0));
        assert_eq!(placement.frames[1], Rect::new(200.0, 0.0, 140.0, 48.0));
    }
}
