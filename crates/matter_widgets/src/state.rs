//! Per-control-state style tables
//!
//! A [`StateTable`] stores explicit values per [`ControlState`]. Lookups for
//! a state without an entry fall back to the `Normal` entry at lookup time,
//! so changing `Normal` is visible through every state that has no value of
//! its own.
//!
//! [`StateStyleResolver`] groups the three tab item attributes (image tint,
//! title color, title font), adds built-in defaults, and restricts the
//! states a widget accepts.

use std::fmt::Debug;

use matter_core::Color;
use matter_theme::{Font, OpacityToken, OpacityTokens, TypographyScheme};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{Result, WidgetError};

/// Interaction state used as a style key
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    #[default]
    Normal,
    Highlighted,
    Disabled,
    Selected,
}

/// Explicit per-state values with live fallback to `Normal`
#[derive(Clone, Debug, PartialEq)]
pub struct StateTable<T> {
    entries: FxHashMap<ControlState, T>,
}

impl<T> StateTable<T> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Set or clear (`None`) the value for a state
    pub fn set(&mut self, state: ControlState, value: Option<T>) {
        match value {
            Some(value) => {
                self.entries.insert(state, value);
            }
            None => {
                self.entries.remove(&state);
            }
        }
    }

    /// The value stored for exactly this state
    pub fn get(&self, state: ControlState) -> Option<&T> {
        self.entries.get(&state)
    }

    /// The value for `state`, else the `Normal` value
    pub fn resolve(&self, state: ControlState) -> Option<&T> {
        self.entries
            .get(&state)
            .or_else(|| self.entries.get(&ControlState::Normal))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> StateTable<T> {
    /// Resolve with a final fallback when neither state nor `Normal` is set
    pub fn resolve_or(&self, state: ControlState, default: T) -> T {
        self.resolve(state).cloned().unwrap_or(default)
    }
}

impl<T> Default for StateTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An attribute kind stored in a [`StateStyleResolver`]
pub trait StyleAttribute {
    type Value: Clone + PartialEq + Debug;

    /// Value used when neither the requested state nor `Normal` is set
    fn default_value() -> Self::Value;

    fn table(resolver: &StateStyleResolver) -> &StateTable<Self::Value>;

    fn table_mut(resolver: &mut StateStyleResolver) -> &mut StateTable<Self::Value>;
}

/// Tint applied to item images
pub enum ImageTintColor {}

/// Color of item titles
pub enum TitleColor {}

/// Font of item titles
pub enum TitleFont {}

fn default_content_color() -> Color {
    Color::BLACK.with_alpha(OpacityTokens::default().get(OpacityToken::MediumEmphasis))
}

impl StyleAttribute for ImageTintColor {
    type Value = Color;

    fn default_value() -> Color {
        default_content_color()
    }

    fn table(resolver: &StateStyleResolver) -> &StateTable<Color> {
        &resolver.image_tint_colors
    }

    fn table_mut(resolver: &mut StateStyleResolver) -> &mut StateTable<Color> {
        &mut resolver.image_tint_colors
    }
}

impl StyleAttribute for TitleColor {
    type Value = Color;

    fn default_value() -> Color {
        default_content_color()
    }

    fn table(resolver: &StateStyleResolver) -> &StateTable<Color> {
        &resolver.title_colors
    }

    fn table_mut(resolver: &mut StateStyleResolver) -> &mut StateTable<Color> {
        &mut resolver.title_colors
    }
}

impl StyleAttribute for TitleFont {
    type Value = Font;

    fn default_value() -> Font {
        TypographyScheme::default().button
    }

    fn table(resolver: &StateStyleResolver) -> &StateTable<Font> {
        &resolver.title_fonts
    }

    fn table_mut(resolver: &mut StateStyleResolver) -> &mut StateTable<Font> {
        &mut resolver.title_fonts
    }
}

/// Per-state overrides for item tint color, title color, and title font
#[derive(Clone, Debug, PartialEq)]
pub struct StateStyleResolver {
    owner: &'static str,
    supported: &'static [ControlState],
    image_tint_colors: StateTable<Color>,
    title_colors: StateTable<Color>,
    title_fonts: StateTable<Font>,
}

impl StateStyleResolver {
    /// States accepted by tab bars
    pub const TAB_BAR_STATES: &'static [ControlState] =
        &[ControlState::Normal, ControlState::Selected];

    /// Create an empty resolver accepting only `supported` states.
    ///
    /// `owner` names the widget in error messages.
    pub fn new(owner: &'static str, supported: &'static [ControlState]) -> Self {
        Self {
            owner,
            supported,
            image_tint_colors: StateTable::new(),
            title_colors: StateTable::new(),
            title_fonts: StateTable::new(),
        }
    }

    pub fn supports(&self, state: ControlState) -> bool {
        self.supported.contains(&state)
    }

    fn check(&self, state: ControlState) -> Result<()> {
        if self.supports(state) {
            Ok(())
        } else {
            Err(WidgetError::InvalidState {
                widget: self.owner,
                state,
            })
        }
    }

    /// Store (or clear, with `None`) an override for `state`
    pub fn set_override<A: StyleAttribute>(
        &mut self,
        state: ControlState,
        value: Option<A::Value>,
    ) -> Result<()> {
        self.check(state)?;
        A::table_mut(self).set(state, value);
        Ok(())
    }

    /// The override stored for exactly `state`, without fallback
    pub fn explicit<A: StyleAttribute>(&self, state: ControlState) -> Result<Option<&A::Value>> {
        self.check(state)?;
        Ok(A::table(self).get(state))
    }

    /// Effective value: `state` override, then `Normal` override, then default
    pub fn resolve<A: StyleAttribute>(&self, state: ControlState) -> Result<A::Value> {
        self.check(state)?;
        Ok(A::table(self).resolve_or(state, A::default_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matter_theme::FontWeight;

    fn tab_resolver() -> StateStyleResolver {
        StateStyleResolver::new("TabBarView", StateStyleResolver::TAB_BAR_STATES)
    }

    #[test]
    fn test_fallback_is_live() {
        let mut resolver = tab_resolver();
        resolver
            .set_override::<TitleColor>(ControlState::Normal, Some(Color::RED))
            .unwrap();
        assert_eq!(
            resolver.resolve::<TitleColor>(ControlState::Selected).unwrap(),
            Color::RED
        );

        resolver
            .set_override::<TitleColor>(ControlState::Selected, Some(Color::BLUE))
            .unwrap();
        assert_eq!(
            resolver.resolve::<TitleColor>(ControlState::Selected).unwrap(),
            Color::BLUE
        );
        assert_eq!(
            resolver.resolve::<TitleColor>(ControlState::Normal).unwrap(),
            Color::RED
        );
    }

    #[test]
    fn test_normal_change_reaches_unset_states() {
        let mut resolver = tab_resolver();
        resolver
            .set_override::<ImageTintColor>(ControlState::Normal, Some(Color::RED))
            .unwrap();
        resolver
            .set_override::<ImageTintColor>(ControlState::Normal, Some(Color::WHITE))
            .unwrap();
        assert_eq!(
            resolver.resolve::<ImageTintColor>(ControlState::Selected).unwrap(),
            Color::WHITE
        );
        assert_eq!(
            resolver.explicit::<ImageTintColor>(ControlState::Selected).unwrap(),
            None
        );
    }

    #[test]
    fn test_defaults_when_unset() {
        let resolver = tab_resolver();
        let tint = resolver.resolve::<ImageTintColor>(ControlState::Normal).unwrap();
        assert_eq!(tint, Color::BLACK.with_alpha(0.6));
        let font = resolver.resolve::<TitleFont>(ControlState::Selected).unwrap();
        assert_eq!(font.size, 14.0);
        assert_eq!(font.weight, FontWeight::Medium);
    }

    #[test]
    fn test_clearing_restores_fallback() {
        let mut resolver = tab_resolver();
        let big = Font::system(20.0, FontWeight::Bold);
        resolver
            .set_override::<TitleFont>(ControlState::Selected, Some(big.clone()))
            .unwrap();
        assert_eq!(resolver.resolve::<TitleFont>(ControlState::Selected).unwrap(), big);
        resolver
            .set_override::<TitleFont>(ControlState::Selected, None)
            .unwrap();
        assert_eq!(
            resolver.resolve::<TitleFont>(ControlState::Selected).unwrap(),
            TitleFont::default_value()
        );
    }

    #[test]
    fn test_unsupported_state_is_rejected() {
        let mut resolver = tab_resolver();
        let err = resolver
            .set_override::<TitleColor>(ControlState::Highlighted, Some(Color::RED))
            .unwrap_err();
        assert!(matches!(
            err,
            WidgetError::InvalidState {
                state: ControlState::Highlighted,
                ..
            }
        ));
        assert!(resolver.resolve::<TitleColor>(ControlState::Disabled).is_err());
        assert_eq!(resolver, tab_resolver());
    }

    #[test]
    fn test_state_table_resolve() {
        let mut table = StateTable::new();
        assert_eq!(table.resolve(ControlState::Disabled), None);
        table.set(ControlState::Normal, Some(1));
        table.set(ControlState::Disabled, Some(2));
        assert_eq!(table.resolve(ControlState::Highlighted), Some(&1));
        assert_eq!(table.resolve(ControlState::Disabled), Some(&2));
        assert_eq!(table.resolve_or(ControlState::Selected, 9), 1);
    }
}
