//! Floating button theming
#![allow(deprecated)]

use matter_core::{Color, Event, EventKind, Point};
use matter_theme::{
    ColorSchemeDefaults, ColorScheming, SchemeConfig, SemanticColorScheme, UserInterfaceStyle,
};
use matter_widgets::{
    ControlState, FloatingButton, FloatingButtonColorThemer, FloatingButtonShape, Widget,
};

#[test]
fn test_applying_twice_matches_applying_once() {
    let scheme = SemanticColorScheme::new(ColorSchemeDefaults::Material201804);

    let mut once = FloatingButton::new(FloatingButtonShape::Default);
    FloatingButtonColorThemer::apply_semantic_color_scheme(&scheme, &mut once);

    let mut twice = FloatingButton::new(FloatingButtonShape::Default);
    FloatingButtonColorThemer::apply_semantic_color_scheme(&scheme, &mut twice);
    let after_first = twice.style().clone();
    FloatingButtonColorThemer::apply_semantic_color_scheme(&scheme, &mut twice);

    assert_eq!(twice.style(), &after_first);
    assert_eq!(twice.style(), once.style());
    assert_eq!(twice.appearance(), once.appearance());
}

#[test]
fn test_reapplying_replaces_previous_scheme() {
    let light = SemanticColorScheme::new(ColorSchemeDefaults::Material201804);
    let dark = SemanticColorScheme::with_style(
        ColorSchemeDefaults::Material201907,
        UserInterfaceStyle::Dark,
    );

    let mut button = FloatingButton::new(FloatingButtonShape::Default);
    FloatingButtonColorThemer::apply_semantic_color_scheme(&light, &mut button);
    FloatingButtonColorThemer::apply_semantic_color_scheme(&dark, &mut button);

    let mut fresh = FloatingButton::new(FloatingButtonShape::Default);
    FloatingButtonColorThemer::apply_semantic_color_scheme(&dark, &mut fresh);
    assert_eq!(button.style(), fresh.style());
    assert_eq!(
        button.style().ripple_color,
        dark.primary_color().with_alpha(0.16)
    );
}

#[test]
fn test_disabled_appearance_after_theming() {
    let scheme = SemanticColorScheme::with_style(
        ColorSchemeDefaults::Material201907,
        UserInterfaceStyle::Dark,
    );
    let mut button = FloatingButton::new(FloatingButtonShape::Mini);
    button.apply_secondary_theme(&scheme);

    let normal = button.appearance();
    assert_eq!(normal.state, ControlState::Normal);
    assert_eq!(normal.background_color, scheme.secondary_color());
    assert_eq!(normal.title_color, scheme.on_secondary_color());

    button.set_enabled(false);
    let disabled = button.appearance();
    assert_eq!(disabled.background_color, Color::WHITE.with_alpha(0.12));
    assert_eq!(disabled.image_tint_color, Color::WHITE.with_alpha(0.38));
    assert_eq!(disabled.alpha, 1.0);
}

#[test]
fn test_pressed_state_falls_back_to_normal_colors() {
    let scheme = SemanticColorScheme::new(ColorSchemeDefaults::Material201804);
    let mut button = FloatingButton::new(FloatingButtonShape::Default);
    button.apply_secondary_theme(&scheme);

    button.handle_event(&Event::new(EventKind::PointerDown, Point::new(28.0, 28.0)));
    let pressed = button.appearance();
    assert_eq!(pressed.state, ControlState::Highlighted);
    assert_eq!(pressed.background_color, scheme.secondary_color());
}

#[test]
fn test_theming_from_configured_scheme() {
    let scheme = SchemeConfig::from_toml(
        r##"
        [colors]
        secondary = "#FF5722"
        primary = "#3F51B5"
        "##,
    )
    .unwrap()
    .build()
    .unwrap();

    let mut button = FloatingButton::new(FloatingButtonShape::Default);
    button.apply_secondary_theme(&scheme);
    assert_eq!(
        button.appearance().background_color,
        Color::from_hex(0xFF5722)
    );
    assert_eq!(
        button.style().ripple_color,
        Color::from_hex(0x3F51B5).with_alpha(0.16)
    );
}
