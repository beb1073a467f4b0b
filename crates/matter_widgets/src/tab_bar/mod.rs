//! Material tab bar
//!
//! [`TabBarView`] arranges a sequence of [`TabBarItem`]s across a bar and
//! tracks which one is selected. Its pieces:
//!
//! - [`LayoutStyleResolver`] picks the effective layout style, degrading a
//!   preferred style that does not fit
//! - [`StateStyleResolver`] resolves per-state title colors, image tints,
//!   and title fonts with live fallback to `Normal`
//! - [`PaddingTable`] holds content padding per layout style
//!
//! Rendering, scrolling, and accessibility are delegated to a
//! [`TabBarHost`]. Selection animations are driven by [`TabBarView::update`].
//!
//! # Example
//!
//! ```
//! use matter_core::Rect;
//! use matter_widgets::tab_bar::{LayoutStyle, TabBarItem, TabBarView};
//!
//! let mut bar = TabBarView::new();
//! bar.set_frame(Rect::new(0.0, 0.0, 300.0, 48.0)).unwrap();
//! let items: Vec<_> = (0..5).map(|i| TabBarItem::new(format!("Tab {i}"))).collect();
//! bar.set_items(items.clone());
//!
//! // 300 / 5 is below the 90pt minimum, so the bar scrolls
//! assert_eq!(bar.effective_layout_style(), LayoutStyle::Scrollable);
//!
//! bar.set_selected_item(Some(&items[2]), false);
//! assert_eq!(bar.selected_item(), Some(&items[2]));
//! ```

mod config;
mod host;
mod indicator;
mod item;
mod layout;
mod measure;
mod padding;
mod selection;

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use matter_animation::{AnimationScheduler, Easing, Transition, TransitionId};
use matter_core::events::EventKind;
use matter_core::{
    Capabilities, Color, EdgeInsets, Event, LayoutDirection, PlatformVersion, Point, Rect, Size,
};
use matter_theme::{Font, OpacityToken, OpacityTokens, UserInterfaceStyle};

use crate::error::{Result, WidgetError};
use crate::state::{
    ControlState, ImageTintColor, StateStyleResolver, StyleAttribute, TitleColor, TitleFont,
};
use crate::widget::{Widget, WidgetId};

pub use config::TabBarConfig;
pub use host::{AccessibilityElement, BadgeAppearance, TabBarDelegate, TabBarHost};
pub use indicator::{SelectionIndicatorTemplate, UnderlineIndicatorTemplate};
pub use item::{CustomItemView, ItemImage, TabBarItem};
pub use layout::{
    place_items, ItemMetrics, LayoutStyle, LayoutStyleResolver, Placement, DEFAULT_MIN_ITEM_WIDTH,
};
pub use measure::{EstimatedTextMeasurer, TextMeasurer};
pub use padding::{PaddingTable, SCROLLABLE_LEADING_PADDING};
pub use selection::SelectionPhase;

use selection::Selection;

/// Total duration of the selection change animation
pub const SELECTION_CHANGE_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Timing curve of the selection change animation
pub const SELECTION_CHANGE_TIMING_CURVE: Easing = Easing::Standard;

/// Content insets of items with a title and no image
const TEXT_ONLY_ITEM_INSETS: EdgeInsets = EdgeInsets::symmetric(8.0, 16.0);

/// Content insets of items with an image
const IMAGE_ITEM_INSETS: EdgeInsets = EdgeInsets::symmetric(12.0, 16.0);

/// A coordinate system rects can be converted into
pub trait CoordinateSpace {
    /// Origin of this space in window coordinates
    fn origin_in_window(&self) -> Point;
}

/// Window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowSpace;

impl CoordinateSpace for WindowSpace {
    fn origin_in_window(&self) -> Point {
        Point::ZERO
    }
}

/// A rect given in window coordinates
impl CoordinateSpace for Rect {
    fn origin_in_window(&self) -> Point {
        self.origin
    }
}

/// Environment traits that affect layout and appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraitCollection {
    pub layout_direction: LayoutDirection,
    pub user_interface_style: UserInterfaceStyle,
    /// Multiplier applied to title fonts when measuring
    pub content_size_scale: f32,
}

impl Default for TraitCollection {
    fn default() -> Self {
        Self {
            layout_direction: LayoutDirection::LeftToRight,
            user_interface_style: UserInterfaceStyle::Light,
            content_size_scale: 1.0,
        }
    }
}

/// Called after the bar has reacted to a trait change
pub type TraitChangeHook = Box<dyn FnMut(&TabBarView, Option<&TraitCollection>)>;

/// Resolved geometry and style of one item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemLayout {
    pub index: usize,
    /// Item frame in content coordinates
    pub frame: Rect,
    /// Frame inset by the item content insets
    pub content_frame: Rect,
    pub state: ControlState,
    pub title_color: Color,
    pub image_tint_color: Color,
    pub title_font: Font,
}

/// Observable state of a bar, for equality checks
#[derive(Clone, Debug, PartialEq)]
pub struct TabBarSnapshot {
    pub items: Vec<TabBarItem>,
    pub selected_item: Option<TabBarItem>,
    pub effective_layout_style: LayoutStyle,
    pub content_offset: Point,
    pub content_size: Size,
    pub selection_indicator_frame: Option<Rect>,
    pub is_animating_selection: bool,
}

/// Layout derived from the bar's inputs and its items' content
struct LayoutCache {
    /// Item revisions the layout was computed from
    item_revisions: Vec<u64>,
    effective_layout_style: LayoutStyle,
    content_size: Size,
    item_layouts: Vec<ItemLayout>,
}

struct SelectionAnimation {
    id: TransitionId,
    /// Frame of the previously selected item in content coordinates
    from: Rect,
}

/// Material tab bar
pub struct TabBarView {
    id: WidgetId,
    frame: Rect,
    safe_area_insets: EdgeInsets,
    should_adjust_for_safe_area_insets: bool,
    items: Vec<TabBarItem>,
    selection: Selection,
    preferred_layout_style: LayoutStyle,
    layout_resolver: LayoutStyleResolver,
    styles: StateStyleResolver,
    padding: PaddingTable,
    item_view_content_insets: Option<EdgeInsets>,
    bar_tint_color: Color,
    bottom_divider_color: Color,
    ripple_color: Color,
    selection_indicator_stroke_color: Option<Color>,
    indicator_template: Rc<dyn SelectionIndicatorTemplate>,
    badge_appearance: BadgeAppearance,
    layout: RefCell<LayoutCache>,
    content_offset: Point,
    measurer: Box<dyn TextMeasurer>,
    host: Option<Rc<dyn TabBarHost>>,
    delegate: Option<Weak<dyn TabBarDelegate>>,
    traits: TraitCollection,
    trait_change_hook: Option<TraitChangeHook>,
    capabilities: Capabilities,
    scheduler: AnimationScheduler,
    selection_animation: Option<SelectionAnimation>,
    pressed_index: Option<usize>,
}

impl TabBarView {
    /// Create an empty bar assuming a current platform
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::default())
    }

    /// Create an empty bar for a host reporting `version`
    pub fn with_platform_version(version: PlatformVersion) -> Self {
        Self::with_capabilities(Capabilities::resolve(version))
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            id: WidgetId::next(),
            frame: Rect::ZERO,
            safe_area_insets: EdgeInsets::ZERO,
            should_adjust_for_safe_area_insets: true,
            items: Vec::new(),
            selection: Selection::new(),
            preferred_layout_style: LayoutStyle::Fixed,
            layout_resolver: LayoutStyleResolver::default(),
            styles: StateStyleResolver::new("TabBarView", StateStyleResolver::TAB_BAR_STATES),
            padding: PaddingTable::new(),
            item_view_content_insets: None,
            bar_tint_color: Color::WHITE,
            bottom_divider_color: Color::TRANSPARENT,
            ripple_color: Color::BLACK
                .with_alpha(OpacityTokens::default().get(OpacityToken::Ripple)),
            selection_indicator_stroke_color: None,
            indicator_template: Rc::new(UnderlineIndicatorTemplate::default()),
            badge_appearance: BadgeAppearance::default(),
            layout: RefCell::new(LayoutCache {
                item_revisions: Vec::new(),
                effective_layout_style: LayoutStyle::Fixed,
                content_size: Size::ZERO,
                item_layouts: Vec::new(),
            }),
            content_offset: Point::ZERO,
            measurer: Box::new(EstimatedTextMeasurer::default()),
            host: None,
            delegate: None,
            traits: TraitCollection::default(),
            trait_change_hook: None,
            capabilities,
            scheduler: AnimationScheduler::new(),
            selection_animation: None,
            pressed_index: None,
        }
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    pub fn set_host(&mut self, host: Option<Rc<dyn TabBarHost>>) {
        self.host = host;
        self.relayout();
    }

    /// Register the selection observer; the bar keeps only a weak reference
    pub fn set_delegate(&mut self, delegate: Option<Weak<dyn TabBarDelegate>>) {
        self.delegate = delegate;
    }

    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.relayout();
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn with_host(&self, f: impl FnOnce(&dyn TabBarHost)) {
        if let Some(host) = &self.host {
            f(host.as_ref());
        }
    }

    // =========================================================================
    // Items and selection
    // =========================================================================

    pub fn items(&self) -> &[TabBarItem] {
        &self.items
    }

    /// Replace the items, dropping the selection if its item is gone
    pub fn set_items(&mut self, items: Vec<TabBarItem>) {
        self.items = items;
        if self.selection.retain_in(&self.items) {
            tracing::debug!("TabBarView::set_items - selected item removed");
            self.cancel_selection_animation();
        }
        self.pressed_index = None;
        self.relayout();
    }

    /// Re-resolve now after `item` changed.
    ///
    /// Item changes are otherwise picked up by the next query or
    /// [`update`](Self::update).
    pub fn item_did_change(&mut self, item: &TabBarItem) {
        if self.items.contains(item) {
            self.relayout();
        }
    }

    pub fn selected_item(&self) -> Option<&TabBarItem> {
        self.selection.item()
    }

    pub fn selection_phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    /// Select `item`, or clear the selection with `None`.
    ///
    /// Items that are not in the bar are ignored. With `animated`, the
    /// indicator moves over [`SELECTION_CHANGE_ANIMATION_DURATION`]; a newer
    /// call replaces an animation still in flight.
    pub fn set_selected_item(&mut self, item: Option<&TabBarItem>, animated: bool) {
        let Some(item) = item else {
            if self.selection.item().is_some() {
                tracing::debug!("TabBarView::set_selected_item - cleared");
                self.cancel_selection_animation();
                self.selection.clear();
                self.restyle_items();
                self.with_host(|host| host.set_needs_display());
            }
            return;
        };

        if !self.items.contains(item) {
            tracing::trace!("TabBarView::set_selected_item - ignoring non-member {:?}", item);
            return;
        }
        if self.selection.item() == Some(item) {
            return;
        }

        let from = self.current_indicator_item_frame();
        self.cancel_selection_animation();
        self.selection.select(item.clone());

        if animated {
            if let Some(from) = from {
                let id = self.scheduler.schedule(Transition::new(
                    SELECTION_CHANGE_ANIMATION_DURATION,
                    SELECTION_CHANGE_TIMING_CURVE,
                ));
                self.selection_animation = Some(SelectionAnimation { id, from });
            }
        }
        tracing::debug!(
            "TabBarView::set_selected_item - {:?} (animated: {})",
            item,
            animated
        );

        self.restyle_items();
        self.with_host(|host| host.set_needs_display());

        if self.effective_layout_style() == LayoutStyle::ScrollableCentered {
            self.scroll_to_item(item, animated);
        }
    }

    fn cancel_selection_animation(&mut self) {
        if let Some(animation) = self.selection_animation.take() {
            self.scheduler.cancel(animation.id);
        }
    }

    /// Advance the selection animation. Returns true while it is running.
    pub fn update(&mut self, dt: Duration) -> bool {
        if self.items_changed() {
            self.relayout();
        }
        let finished = self.scheduler.tick(dt);
        let Some(id) = self.selection_animation.as_ref().map(|animation| animation.id) else {
            return false;
        };
        tracing::trace!("TabBarView::update - dt {:?}", dt);
        if finished.contains(&id) {
            self.selection_animation = None;
        }
        self.with_host(|host| host.set_needs_display());
        self.is_animating_selection()
    }

    pub fn is_animating_selection(&self) -> bool {
        self.selection_animation.is_some()
    }

    /// Selected item frame in content coordinates, interpolated while animating
    fn current_indicator_item_frame(&self) -> Option<Rect> {
        let target = self.layout_for(self.selection.item()?)?.frame;
        let frame = self
            .selection_animation
            .as_ref()
            .and_then(|animation| {
                self.scheduler
                    .get(animation.id)
                    .map(|transition| transition.value(&animation.from, &target))
            })
            .unwrap_or(target);
        Some(frame)
    }

    /// Frame of the selection indicator in bar coordinates
    pub fn selection_indicator_frame(&self) -> Option<Rect> {
        let frame = self.current_indicator_item_frame()?;
        Some(
            self.indicator_template
                .indicator_frame(self.content_to_bar(frame)),
        )
    }

    pub fn set_selection_indicator_template(&mut self, template: Rc<dyn SelectionIndicatorTemplate>) {
        self.indicator_template = template;
        self.with_host(|host| host.set_needs_display());
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Frame in window coordinates
    pub fn set_frame(&mut self, frame: Rect) -> Result<()> {
        check_length("frame width", frame.width())?;
        check_length("frame height", frame.height())?;
        if !frame.x().is_finite() || !frame.y().is_finite() {
            return Err(WidgetError::PreconditionViolation(format!(
                "frame origin must be finite, got {:?}",
                frame.origin
            )));
        }
        self.frame = frame;
        self.relayout();
        Ok(())
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self.frame.size,
        }
    }

    pub fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area_insets
    }

    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) -> Result<()> {
        check_insets("safe area insets", insets)?;
        self.safe_area_insets = insets;
        self.relayout();
        Ok(())
    }

    pub fn should_adjust_for_safe_area_insets(&self) -> bool {
        self.should_adjust_for_safe_area_insets
    }

    pub fn set_should_adjust_for_safe_area_insets(&mut self, adjust: bool) {
        self.should_adjust_for_safe_area_insets = adjust;
        self.relayout();
    }

    pub fn min_item_width(&self) -> f32 {
        self.layout_resolver.min_item_width
    }

    pub fn set_min_item_width(&mut self, width: f32) -> Result<()> {
        check_length("min item width", width)?;
        self.layout_resolver.min_item_width = width;
        self.relayout();
        Ok(())
    }

    pub fn item_view_content_insets(&self) -> Option<EdgeInsets> {
        self.item_view_content_insets
    }

    /// Insets around item content; `None` picks them per item kind
    pub fn set_item_view_content_insets(&mut self, insets: Option<EdgeInsets>) -> Result<()> {
        if let Some(insets) = insets {
            check_insets("item view content insets", insets)?;
        }
        self.item_view_content_insets = insets;
        self.relayout();
        Ok(())
    }

    /// Content insets used for `item`
    pub fn item_content_insets(&self, item: &TabBarItem) -> EdgeInsets {
        self.item_view_content_insets.unwrap_or_else(|| {
            if item.has_title() && !item.has_image() {
                TEXT_ONLY_ITEM_INSETS
            } else {
                IMAGE_ITEM_INSETS
            }
        })
    }

    pub fn content_padding(&self, style: LayoutStyle) -> EdgeInsets {
        self.padding.get(style)
    }

    pub fn set_content_padding(&mut self, padding: EdgeInsets, style: LayoutStyle) -> Result<()> {
        check_insets("content padding", padding)?;
        self.padding.set(style, padding);
        self.relayout();
        Ok(())
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.traits.layout_direction
    }

    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        let traits = TraitCollection {
            layout_direction: direction,
            ..self.traits
        };
        self.replace_traits(traits);
    }

    pub fn preferred_layout_style(&self) -> LayoutStyle {
        self.preferred_layout_style
    }

    pub fn set_preferred_layout_style(&mut self, style: LayoutStyle) {
        self.preferred_layout_style = style;
        self.relayout();
    }

    pub fn effective_layout_style(&self) -> LayoutStyle {
        self.layout().effective_layout_style
    }

    pub fn content_size(&self) -> Size {
        self.layout().content_size
    }

    /// Scroll position, clamped to the current scrollable range
    pub fn content_offset(&self) -> Point {
        Point::new(
            self.content_offset.x.clamp(0.0, self.max_content_offset()),
            0.0,
        )
    }

    /// Record a scroll position reported by the host
    pub fn set_content_offset(&mut self, offset: Point) -> Result<()> {
        if !offset.x.is_finite() || !offset.y.is_finite() {
            return Err(WidgetError::PreconditionViolation(format!(
                "content offset must be finite, got {offset:?}"
            )));
        }
        self.content_offset = Point::new(offset.x.clamp(0.0, self.max_content_offset()), 0.0);
        Ok(())
    }

    fn max_content_offset(&self) -> f32 {
        (self.layout().content_size.width - self.frame.width()).max(0.0)
    }

    pub fn item_layouts(&self) -> Vec<ItemLayout> {
        self.layout().item_layouts.clone()
    }

    fn layout_for(&self, item: &TabBarItem) -> Option<ItemLayout> {
        let index = self.items.iter().position(|candidate| candidate == item)?;
        self.layout().item_layouts.get(index).cloned()
    }

    fn content_to_bar(&self, rect: Rect) -> Rect {
        let offset = self.content_offset();
        rect.offset(-offset.x, -offset.y)
    }

    /// Frame of `item` converted into `space`; the zero rect when absent
    pub fn rect_for_item(&self, item: &TabBarItem, space: &dyn CoordinateSpace) -> Rect {
        let Some(layout) = self.layout_for(item) else {
            return Rect::ZERO;
        };
        let target = space.origin_in_window();
        self.content_to_bar(layout.frame).offset(
            self.frame.x() - target.x,
            self.frame.y() - target.y,
        )
    }

    /// Scroll so `item` is centered, clamped to the scrollable range
    pub fn scroll_to_item(&mut self, item: &TabBarItem, animated: bool) {
        let Some(frame) = self.layout_for(item).map(|layout| layout.frame) else {
            return;
        };
        let x = (frame.mid_x() - self.frame.width() / 2.0).clamp(0.0, self.max_content_offset());
        self.content_offset = Point::new(x, 0.0);
        let visible = Rect::new(x, 0.0, self.frame.width(), self.frame.height());
        tracing::trace!("TabBarView::scroll_to_item - {:?}", visible);
        self.with_host(|host| host.scroll_to_rect(visible, animated));
    }

    fn item_index_at(&self, point: Point) -> Option<usize> {
        if !self.bounds().contains(point) {
            return None;
        }
        let offset = self.content_offset();
        let content_point = Point::new(point.x + offset.x, point.y + offset.y);
        self.layout()
            .item_layouts
            .iter()
            .find(|layout| layout.frame.contains(content_point))
            .map(|layout| layout.index)
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// Describe `item` for assistive technologies and hand it to the host
    pub fn accessibility_element_for_item(
        &self,
        item: &TabBarItem,
    ) -> Option<AccessibilityElement> {
        let layout = self.layout_for(item)?;
        let element = AccessibilityElement {
            label: item.resolved_accessibility_label(),
            frame: self.content_to_bar(layout.frame),
            is_selected: self.selection.item() == Some(item),
            index: layout.index,
            count: self.items.len(),
        };
        self.with_host(|host| host.materialize_accessibility_element(&element));
        Some(element)
    }

    /// Item to preview in the large content viewer at a bar-local point
    pub fn large_content_item_at(&self, point: Point) -> Option<TabBarItem> {
        if !self.capabilities.large_content_viewer {
            return None;
        }
        let index = self.item_index_at(point)?;
        self.items.get(index).cloned()
    }

    // =========================================================================
    // Style
    // =========================================================================

    fn resolved<A: StyleAttribute>(&self, state: ControlState) -> A::Value {
        self.styles
            .resolve::<A>(state)
            .unwrap_or_else(|_| A::default_value())
    }

    pub fn title_color(&self, state: ControlState) -> Result<Color> {
        self.styles.resolve::<TitleColor>(state)
    }

    pub fn set_title_color(&mut self, color: Option<Color>, state: ControlState) -> Result<()> {
        self.styles.set_override::<TitleColor>(state, color)?;
        self.restyle_items();
        self.with_host(|host| host.set_needs_display());
        Ok(())
    }

    pub fn image_tint_color(&self, state: ControlState) -> Result<Color> {
        self.styles.resolve::<ImageTintColor>(state)
    }

    pub fn set_image_tint_color(&mut self, color: Option<Color>, state: ControlState) -> Result<()> {
        self.styles.set_override::<ImageTintColor>(state, color)?;
        self.restyle_items();
        self.with_host(|host| host.set_needs_display());
        Ok(())
    }

    pub fn title_font(&self, state: ControlState) -> Result<Font> {
        self.styles.resolve::<TitleFont>(state)
    }

    /// Fonts change item widths, so this re-resolves the layout
    pub fn set_title_font(&mut self, font: Option<Font>, state: ControlState) -> Result<()> {
        if let Some(font) = &font {
            check_length("title font size", font.size)?;
        }
        self.styles.set_override::<TitleFont>(state, font)?;
        self.relayout();
        Ok(())
    }

    pub fn style_resolver(&self) -> &StateStyleResolver {
        &self.styles
    }

    pub fn bar_tint_color(&self) -> Color {
        self.bar_tint_color
    }

    pub fn set_bar_tint_color(&mut self, color: Color) {
        self.bar_tint_color = color;
        self.with_host(|host| host.set_needs_display());
    }

    pub fn bottom_divider_color(&self) -> Color {
        self.bottom_divider_color
    }

    pub fn set_bottom_divider_color(&mut self, color: Color) {
        self.bottom_divider_color = color;
        self.with_host(|host| host.set_needs_display());
    }

    pub fn ripple_color(&self) -> Color {
        self.ripple_color
    }

    pub fn set_ripple_color(&mut self, color: Color) {
        self.ripple_color = color;
    }

    /// Indicator color; defaults to the selected title color
    pub fn selection_indicator_stroke_color(&self) -> Color {
        self.selection_indicator_stroke_color
            .unwrap_or_else(|| self.resolved::<TitleColor>(ControlState::Selected))
    }

    pub fn set_selection_indicator_stroke_color(&mut self, color: Option<Color>) {
        self.selection_indicator_stroke_color = color;
        self.with_host(|host| host.set_needs_display());
    }

    pub fn item_badge_appearance(&self) -> &BadgeAppearance {
        &self.badge_appearance
    }

    pub fn set_item_badge_appearance(&mut self, appearance: BadgeAppearance) {
        self.badge_appearance = appearance;
        self.render_badges();
    }

    // =========================================================================
    // Traits
    // =========================================================================

    pub fn trait_collection(&self) -> TraitCollection {
        self.traits
    }

    pub fn set_trait_collection(&mut self, traits: TraitCollection) -> Result<()> {
        let scale = traits.content_size_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(WidgetError::PreconditionViolation(format!(
                "content size scale must be finite and positive, got {scale}"
            )));
        }
        self.replace_traits(traits);
        Ok(())
    }

    fn replace_traits(&mut self, traits: TraitCollection) {
        let previous = std::mem::replace(&mut self.traits, traits);
        if previous != traits {
            self.trait_collection_did_change(Some(&previous));
        }
    }

    /// Replace the hook run after trait changes
    pub fn set_trait_collection_did_change_hook(&mut self, hook: Option<TraitChangeHook>) {
        self.trait_change_hook = hook;
    }

    /// Recompute derived state, then run the trait change hook
    pub fn trait_collection_did_change(&mut self, previous: Option<&TraitCollection>) {
        self.relayout();
        if let Some(mut hook) = self.trait_change_hook.take() {
            hook(self, previous);
            if self.trait_change_hook.is_none() {
                self.trait_change_hook = Some(hook);
            }
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Physical horizontal safe area the layout avoids
    fn horizontal_safe_area(&self) -> EdgeInsets {
        if self.should_adjust_for_safe_area_insets {
            EdgeInsets::new(0.0, self.safe_area_insets.left, 0.0, self.safe_area_insets.right)
        } else {
            EdgeInsets::ZERO
        }
    }

    fn item_metrics(&self) -> Vec<ItemMetrics> {
        let scale = self.traits.content_size_scale;
        let fonts = [
            self.resolved::<TitleFont>(ControlState::Normal),
            self.resolved::<TitleFont>(ControlState::Selected),
        ];
        self.items
            .iter()
            .map(|item| {
                if let Some(view) = item.custom_view() {
                    return ItemMetrics {
                        intrinsic_width: view.intrinsic_width(),
                        respects_min_width: view.respects_min_width(),
                    };
                }
                let title_width = item
                    .title()
                    .map(|title| {
                        fonts
                            .iter()
                            .map(|font| {
                                let scaled = font.clone().with_size(font.size * scale);
                                self.measurer.measure(&title, &scaled)
                            })
                            .fold(0.0, f32::max)
                    })
                    .unwrap_or(0.0);
                let image_width = item.image_info().map_or(0.0, |image| image.size.width);
                let insets = self.item_content_insets(item);
                ItemMetrics::new(insets.horizontal() + title_width.max(image_width))
            })
            .collect()
    }

    /// Re-resolve the layout and clamp the stored scroll position
    fn relayout(&mut self) {
        self.refresh_layout();
        self.content_offset = self.content_offset();
    }

    /// Current layout, recomputed first when an item's content changed
    fn layout(&self) -> Ref<'_, LayoutCache> {
        if self.items_changed() {
            tracing::debug!("TabBarView - item content changed");
            self.refresh_layout();
        }
        self.layout.borrow()
    }

    fn items_changed(&self) -> bool {
        let cache = self.layout.borrow();
        cache.item_revisions.len() != self.items.len()
            || self
                .items
                .iter()
                .zip(&cache.item_revisions)
                .any(|(item, &revision)| item.revision() != revision)
    }

    /// Re-resolve the effective style and place every item
    fn refresh_layout(&self) {
        let item_revisions = self.items.iter().map(TabBarItem::revision).collect();
        let metrics = self.item_metrics();
        let safe_area = self.horizontal_safe_area();
        let region = Size::new(
            (self.frame.width() - safe_area.horizontal()).max(0.0),
            self.frame.height(),
        );

        let available = (region.width
            - self.padding.get(self.preferred_layout_style).horizontal())
        .max(0.0);
        let effective =
            self.layout_resolver
                .resolve(self.preferred_layout_style, &metrics, available);
        let previous = self.layout.borrow().effective_layout_style;
        if effective != previous {
            tracing::debug!(
                "TabBarView - effective layout style {:?} -> {:?}",
                previous,
                effective
            );
        }

        let placement = place_items(
            effective,
            &metrics,
            region,
            self.padding.get(effective),
            self.layout_resolver.min_item_width,
            self.traits.layout_direction,
        );
        let content_size = Size::new(
            placement.content_size.width + safe_area.horizontal(),
            self.frame.height(),
        );
        let item_layouts = placement
            .frames
            .into_iter()
            .zip(&self.items)
            .enumerate()
            .map(|(index, (frame, item))| {
                let frame = frame.offset(safe_area.left, 0.0);
                ItemLayout {
                    index,
                    frame,
                    content_frame: frame.inset_by(self.item_content_insets(item)),
                    state: ControlState::Normal,
                    title_color: Color::TRANSPARENT,
                    image_tint_color: Color::TRANSPARENT,
                    title_font: TitleFont::default_value(),
                }
            })
            .collect();
        *self.layout.borrow_mut() = LayoutCache {
            item_revisions,
            effective_layout_style: effective,
            content_size,
            item_layouts,
        };

        self.restyle_items();
        self.render_badges();
        self.with_host(|host| host.set_needs_layout());
    }

    /// Refresh per-item state and resolved style without moving items
    fn restyle_items(&self) {
        let mut cache = self.layout.borrow_mut();
        for layout in &mut cache.item_layouts {
            let selected = self.selection.item() == self.items.get(layout.index);
            let state = if selected {
                ControlState::Selected
            } else {
                ControlState::Normal
            };
            layout.state = state;
            layout.title_color = self.resolved::<TitleColor>(state);
            layout.image_tint_color = self.resolved::<ImageTintColor>(state);
            layout.title_font = self.resolved::<TitleFont>(state);
        }
    }

    fn render_badges(&self) {
        let Some(host) = &self.host else {
            return;
        };
        for (index, item) in self.items.iter().enumerate() {
            let Some(value) = item.badge_value() else {
                continue;
            };
            let mut appearance = self.badge_appearance.clone();
            if let Some(color) = item.badge_color() {
                appearance.background_color = color;
            }
            host.render_badge(index, &value, &appearance);
        }
    }

    /// Capture observable state for comparison
    pub fn snapshot(&self) -> TabBarSnapshot {
        TabBarSnapshot {
            items: self.items.clone(),
            selected_item: self.selection.item().cloned(),
            effective_layout_style: self.effective_layout_style(),
            content_offset: self.content_offset(),
            content_size: self.content_size(),
            selection_indicator_frame: self.selection_indicator_frame(),
            is_animating_selection: self.is_animating_selection(),
        }
    }

    fn tap_item(&mut self, index: usize) {
        let Some(item) = self.items.get(index).cloned() else {
            return;
        };
        let delegate = self.delegate.as_ref().and_then(Weak::upgrade);
        if let Some(delegate) = &delegate {
            if !delegate.should_select_item(self, &item) {
                tracing::debug!("TabBarView - delegate declined {:?}", item);
                return;
            }
        }
        self.set_selected_item(Some(&item), true);
        if let Some(delegate) = &delegate {
            delegate.did_select_item(self, &item);
        }
    }
}

impl Default for TabBarView {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateSpace for TabBarView {
    fn origin_in_window(&self) -> Point {
        self.frame.origin
    }
}

impl Widget for TabBarView {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event.kind {
            EventKind::PointerDown => {
                self.pressed_index = self.item_index_at(event.position);
                self.pressed_index.is_some()
            }
            EventKind::PointerUp => {
                let pressed = self.pressed_index.take();
                match (pressed, self.item_index_at(event.position)) {
                    (Some(down), Some(up)) if down == up => {
                        self.tap_item(up);
                        true
                    }
                    _ => false,
                }
            }
            EventKind::PointerCancel | EventKind::PointerLeave => {
                self.pressed_index = None;
                false
            }
            EventKind::PointerMove | EventKind::PointerEnter => false,
        }
    }
}

fn check_length(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WidgetError::PreconditionViolation(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

fn check_insets(name: &str, insets: EdgeInsets) -> Result<()> {
    if insets.is_valid() {
        Ok(())
    } else {
        Err(WidgetError::PreconditionViolation(format!(
            "{name} must be finite and non-negative, got {insets:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(width: f32) -> TabBarView {
        let mut bar = TabBarView::new();
        bar.set_frame(Rect::new(0.0, 0.0, width, 48.0)).unwrap();
        bar
    }

    fn items(count: usize) -> Vec<TabBarItem> {
        (0..count).map(|i| TabBarItem::new(format!("T{i}"))).collect()
    }

    #[test]
    fn test_defaults() {
        let bar = TabBarView::new();
        assert_eq!(bar.preferred_layout_style(), LayoutStyle::Fixed);
        assert_eq!(bar.min_item_width(), 90.0);
        assert!(bar.should_adjust_for_safe_area_insets());
        assert_eq!(bar.bottom_divider_color(), Color::TRANSPARENT);
        assert_eq!(bar.ripple_color(), Color::BLACK.with_alpha(0.16));
        assert_eq!(bar.selection_phase(), SelectionPhase::NoSelection);
    }

    #[test]
    fn test_default_item_insets_by_kind() {
        let bar = TabBarView::new();
        let text = TabBarItem::new("Home");
        let image = TabBarItem::with_image(ItemImage::new("home", Size::new(24.0, 24.0)));
        assert_eq!(bar.item_content_insets(&text), EdgeInsets::symmetric(8.0, 16.0));
        assert_eq!(bar.item_content_insets(&image), EdgeInsets::symmetric(12.0, 16.0));
        let both = TabBarItem::new("Home").image(ItemImage::new("home", Size::new(24.0, 24.0)));
        assert_eq!(bar.item_content_insets(&both), EdgeInsets::symmetric(12.0, 16.0));
    }

    #[test]
    fn test_safe_area_reduces_available_width() {
        let mut bar = bar(400.0);
        bar.set_items(items(4));
        assert_eq!(bar.effective_layout_style(), LayoutStyle::Fixed);

        bar.set_safe_area_insets(EdgeInsets::new(0.0, 30.0, 0.0, 30.0))
            .unwrap();
        assert_eq!(bar.effective_layout_style(), LayoutStyle::Scrollable);
        assert_eq!(bar.item_layouts()[0].frame.x(), 30.0 + 52.0);

        bar.set_should_adjust_for_safe_area_insets(false);
        assert_eq!(bar.effective_layout_style(), LayoutStyle::Fixed);
    }

    #[test]
    fn test_geometry_preconditions() {
        let mut bar = TabBarView::new();
        assert!(matches!(
            bar.set_min_item_width(f32::NAN),
            Err(WidgetError::PreconditionViolation(_))
        ));
        assert!(bar.set_min_item_width(-1.0).is_err());
        assert!(bar
            .set_content_padding(EdgeInsets::new(0.0, -4.0, 0.0, 0.0), LayoutStyle::Fixed)
            .is_err());
        assert!(bar.set_frame(Rect::new(f32::INFINITY, 0.0, 10.0, 10.0)).is_err());
        assert_eq!(bar.min_item_width(), 90.0);
    }

    #[test]
    fn test_selected_item_restyles() {
        let mut bar = bar(400.0);
        let items = items(3);
        bar.set_items(items.clone());
        bar.set_title_color(Some(Color::RED), ControlState::Selected)
            .unwrap();
        bar.set_selected_item(Some(&items[1]), false);

        let layouts = bar.item_layouts();
        assert_eq!(layouts[1].state, ControlState::Selected);
        assert_eq!(layouts[1].title_color, Color::RED);
        assert_eq!(layouts[0].state, ControlState::Normal);
        assert_eq!(bar.selection_indicator_stroke_color(), Color::RED);
    }

    #[test]
    fn test_unsupported_state_rejected_by_bar() {
        let mut bar = TabBarView::new();
        assert!(matches!(
            bar.set_image_tint_color(Some(Color::RED), ControlState::Disabled),
            Err(WidgetError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_rect_for_item_in_other_spaces() {
        let mut bar = TabBarView::new();
        bar.set_frame(Rect::new(10.0, 100.0, 400.0, 48.0)).unwrap();
        let items = items(4);
        bar.set_items(items.clone());

        assert_eq!(
            bar.rect_for_item(&items[1], &bar),
            Rect::new(100.0, 0.0, 100.0, 48.0)
        );
        assert_eq!(
            bar.rect_for_item(&items[1], &WindowSpace),
            Rect::new(110.0, 100.0, 100.0, 48.0)
        );
        let parent = Rect::new(10.0, 50.0, 500.0, 500.0);
        assert_eq!(
            bar.rect_for_item(&items[1], &parent),
            Rect::new(100.0, 50.0, 100.0, 48.0)
        );
    }

    #[test]
    fn test_right_to_left_reverses_items() {
        let mut bar = bar(400.0);
        let items = items(4);
        bar.set_items(items.clone());
        bar.set_layout_direction(LayoutDirection::RightToLeft);
        assert_eq!(bar.rect_for_item(&items[0], &bar).x(), 300.0);
        assert_eq!(bar.rect_for_item(&items[3], &bar).x(), 0.0);
    }
}
