//! Tab bar items
//!
//! A [`TabBarItem`] is a shared handle. Two handles are equal only when
//! they point at the same item, so structurally identical items stay
//! distinct members of a bar.
//!
//! Every setter bumps the item's revision, which bars compare against the
//! revision they last laid out so content changes are picked up on the next
//! query.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use matter_core::{Color, Size};

/// A named image shown in an item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemImage {
    pub name: String,
    pub size: Size,
}

impl ItemImage {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Application-provided view replacing the standard title and image
pub trait CustomItemView {
    /// Width the view needs to display its content
    fn intrinsic_width(&self) -> f32;

    /// Whether the bar's minimum item width applies to this view
    fn respects_min_width(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct ItemContent {
    title: Option<String>,
    image: Option<ItemImage>,
    custom_view: Option<Rc<dyn CustomItemView>>,
    badge_value: Option<String>,
    badge_color: Option<Color>,
    accessibility_label: Option<String>,
    revision: u64,
}

/// Shared handle to a tab bar item
#[derive(Clone)]
pub struct TabBarItem {
    content: Rc<RefCell<ItemContent>>,
}

impl TabBarItem {
    /// Item with a title and no image
    pub fn new(title: impl Into<String>) -> Self {
        let item = Self::empty();
        item.set_title(Some(title.into()));
        item
    }

    /// Item without title or image
    pub fn empty() -> Self {
        Self {
            content: Rc::new(RefCell::new(ItemContent::default())),
        }
    }

    /// Item showing only an image
    pub fn with_image(image: ItemImage) -> Self {
        let item = Self::empty();
        item.set_image(Some(image));
        item
    }

    /// Item rendered by a custom view
    pub fn with_custom_view(view: Rc<dyn CustomItemView>) -> Self {
        let item = Self::empty();
        item.set_custom_view(Some(view));
        item
    }

    /// Builder-style image setter
    pub fn image(self, image: ItemImage) -> Self {
        self.set_image(Some(image));
        self
    }

    fn update(&self, apply: impl FnOnce(&mut ItemContent)) {
        let mut content = self.content.borrow_mut();
        apply(&mut *content);
        content.revision = content.revision.wrapping_add(1);
    }

    /// Counter bumped by every content change
    pub fn revision(&self) -> u64 {
        self.content.borrow().revision
    }

    pub fn title(&self) -> Option<String> {
        self.content.borrow().title.clone()
    }

    pub fn set_title(&self, title: Option<String>) {
        self.update(|content| content.title = title);
    }

    pub fn image_info(&self) -> Option<ItemImage> {
        self.content.borrow().image.clone()
    }

    pub fn set_image(&self, image: Option<ItemImage>) {
        self.update(|content| content.image = image);
    }

    pub fn custom_view(&self) -> Option<Rc<dyn CustomItemView>> {
        self.content.borrow().custom_view.clone()
    }

    pub fn set_custom_view(&self, view: Option<Rc<dyn CustomItemView>>) {
        self.update(|content| content.custom_view = view);
    }

    pub fn badge_value(&self) -> Option<String> {
        self.content.borrow().badge_value.clone()
    }

    pub fn set_badge_value(&self, value: Option<String>) {
        self.update(|content| content.badge_value = value);
    }

    /// Badge background overriding the bar's shared badge appearance
    pub fn badge_color(&self) -> Option<Color> {
        self.content.borrow().badge_color
    }

    pub fn set_badge_color(&self, color: Option<Color>) {
        self.update(|content| content.badge_color = color);
    }

    pub fn accessibility_label(&self) -> Option<String> {
        self.content.borrow().accessibility_label.clone()
    }

    pub fn set_accessibility_label(&self, label: Option<String>) {
        self.update(|content| content.accessibility_label = label);
    }

    pub fn has_title(&self) -> bool {
        self.content
            .borrow()
            .title
            .as_ref()
            .is_some_and(|title| !title.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.content.borrow().image.is_some()
    }

    /// Label read by assistive technologies, falling back to the title
    pub fn resolved_accessibility_label(&self) -> String {
        let content = self.content.borrow();
        content
            .accessibility_label
            .clone()
            .or_else(|| content.title.clone())
            .unwrap_or_default()
    }
}

impl PartialEq for TabBarItem {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }
}

impl Eq for TabBarItem {}

impl fmt::Debug for TabBarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = self.content.borrow();
        f.debug_struct("TabBarItem")
            .field("ptr", &Rc::as_ptr(&self.content))
            .field("title", &content.title)
            .field("custom_view", &content.custom_view.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_value() {
        let a = TabBarItem::new("Home");
        let b = TabBarItem::new("Home");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_changes_visible_through_clones() {
        let item = TabBarItem::new("Inbox");
        let handle = item.clone();
        item.set_badge_value(Some("3".into()));
        assert_eq!(handle.badge_value().as_deref(), Some("3"));
    }

    #[test]
    fn test_setters_bump_revision() {
        let item = TabBarItem::new("Inbox");
        let start = item.revision();
        item.set_title(Some("Archive".into()));
        item.clone().set_badge_value(Some("1".into()));
        assert_eq!(item.revision(), start + 2);
    }

    #[test]
    fn test_accessibility_label_fallback() {
        let item = TabBarItem::new("Search");
        assert_eq!(item.resolved_accessibility_label(), "Search");
        item.set_accessibility_label(Some("Find".into()));
        assert_eq!(item.resolved_accessibility_label(), "Find");
        assert_eq!(TabBarItem::empty().resolved_accessibility_label(), "");
    }
}
