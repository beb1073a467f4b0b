//! Color scheme application for floating buttons

use matter_theme::{ColorScheming, OpacityToken, OpacityTokens};

use crate::button::FloatingButton;
use crate::state::ControlState;

impl FloatingButton {
    /// Color the button from the secondary colors of `scheme`.
    ///
    /// Every property written here is overwritten on each call, so applying
    /// the same scheme again leaves the button unchanged.
    pub fn apply_secondary_theme(&mut self, scheme: &impl ColorScheming) {
        let opacity = OpacityTokens::default();
        let disabled_container = scheme
            .on_surface_color()
            .with_alpha(opacity.get(OpacityToken::DisabledContainer));
        let disabled_content = scheme
            .on_surface_color()
            .with_alpha(opacity.get(OpacityToken::DisabledContent));

        self.set_background_color(Some(scheme.secondary_color()), ControlState::Normal);
        self.set_background_color(Some(disabled_container), ControlState::Disabled);
        self.set_image_tint_color(Some(scheme.on_secondary_color()), ControlState::Normal);
        self.set_image_tint_color(Some(disabled_content), ControlState::Disabled);
        self.set_title_color(Some(scheme.on_secondary_color()), ControlState::Normal);
        self.set_title_color(Some(disabled_content), ControlState::Disabled);
        self.set_disabled_alpha(1.0);
        self.set_ripple_color(
            scheme
                .primary_color()
                .with_alpha(opacity.get(OpacityToken::Ripple)),
        );
        tracing::debug!("FloatingButton::apply_secondary_theme - {:?}", self.style());
    }
}

/// Applies a color scheme to floating buttons
#[deprecated(note = "use FloatingButton::apply_secondary_theme")]
pub struct FloatingButtonColorThemer;

#[allow(deprecated)]
impl FloatingButtonColorThemer {
    #[deprecated(note = "use FloatingButton::apply_secondary_theme")]
    pub fn apply_semantic_color_scheme(scheme: &impl ColorScheming, button: &mut FloatingButton) {
        button.apply_secondary_theme(scheme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::FloatingButtonShape;
    use matter_core::Color;
    use matter_theme::{ColorSchemeDefaults, SemanticColorScheme};

    #[test]
    fn test_secondary_mapping() {
        let scheme = SemanticColorScheme::new(ColorSchemeDefaults::Material201804);
        let mut button = FloatingButton::new(FloatingButtonShape::Default);
        button.apply_secondary_theme(&scheme);

        let style = button.style();
        assert_eq!(
            style.background_colors.get(ControlState::Normal),
            Some(&scheme.secondary_color())
        );
        assert_eq!(
            style.title_colors.get(ControlState::Disabled),
            Some(&Color::BLACK.with_alpha(0.38))
        );
        assert_eq!(
            style.background_colors.get(ControlState::Disabled),
            Some(&Color::BLACK.with_alpha(0.12))
        );
        assert_eq!(style.disabled_alpha, 1.0);
        assert_eq!(style.ripple_color, scheme.primary_color().with_alpha(0.16));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_entry_matches_replacement() {
        let scheme = SemanticColorScheme::new(ColorSchemeDefaults::Material201907);
        let mut themed = FloatingButton::new(FloatingButtonShape::Mini);
        let mut legacy = FloatingButton::new(FloatingButtonShape::Mini);
        themed.apply_secondary_theme(&scheme);
        FloatingButtonColorThemer::apply_semantic_color_scheme(&scheme, &mut legacy);
        assert_eq!(themed.style(), legacy.style());
    }
}
