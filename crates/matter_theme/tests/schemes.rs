use matter_core::Color;
use matter_theme::{
    ColorPalette, ColorSchemeDefaults, ColorScheming, ColorToken, SchemeConfig,
    SemanticColorScheme, ThemeError, UserInterfaceStyle,
};

#[test]
fn default_sets_have_expected_ids() {
    let ids: Vec<&str> = [
        ColorSchemeDefaults::Material201804,
        ColorSchemeDefaults::Material201907,
    ]
    .iter()
    .map(|d| d.id())
    .collect();
    assert_eq!(ids, vec!["material_2018_04", "material_2019_07"]);
}

#[test]
fn dark_2019_scheme_has_distinct_primary_and_surface() {
    let light = SemanticColorScheme::with_style(
        ColorSchemeDefaults::Material201907,
        UserInterfaceStyle::Light,
    );
    let dark = SemanticColorScheme::with_style(
        ColorSchemeDefaults::Material201907,
        UserInterfaceStyle::Dark,
    );

    assert_ne!(light.primary_color(), dark.primary_color());
    assert_ne!(light.surface_color(), dark.surface_color());
    assert!(dark.elevation_overlay_enabled_for_dark());
}

#[test]
fn content_colors_contrast_with_their_containers() {
    for style in [UserInterfaceStyle::Light, UserInterfaceStyle::Dark] {
        let scheme = SemanticColorScheme::with_style(ColorSchemeDefaults::Material201907, style);
        let pairs = [
            (scheme.surface_color(), scheme.on_surface_color()),
            (scheme.background_color(), scheme.on_background_color()),
        ];
        for (container, content) in pairs {
            let delta = (container.luminance() - content.luminance()).abs();
            assert!(delta > 0.5, "style={style:?} delta={delta}");
        }
    }
}

#[test]
fn toml_config_overrides_tokens() {
    let scheme = SemanticColorScheme::from_toml(
        r##"
base = "material_2019_07"
style = "dark"
elevation_overlay_enabled_for_dark = false

[colors]
secondary = "#018786"
on_secondary = "#FFFFFF"
"##,
    )
    .unwrap();

    assert_eq!(scheme.secondary_color(), Color::from_hex(0x018786));
    assert_eq!(scheme.on_secondary_color(), Color::WHITE);
    assert_eq!(
        scheme.primary_color(),
        ColorPalette::baseline_dark().primary,
        "unlisted tokens keep the base palette"
    );
    assert!(!scheme.elevation_overlay_enabled_for_dark());
}

#[test]
fn empty_config_is_the_default_scheme() {
    let scheme = SemanticColorScheme::from_toml("").unwrap();
    assert_eq!(scheme, SemanticColorScheme::default());
}

#[test]
fn json_and_toml_configs_agree() {
    let from_toml = SchemeConfig::from_toml(
        r##"
base = "material_2018_04"

[colors]
primary = "#FF5500"
"##,
    )
    .unwrap();
    let from_json: SchemeConfig =
        serde_json::from_str(r##"{"base":"material_2018_04","colors":{"primary":"#FF5500"}}"##)
            .unwrap();

    assert_eq!(from_toml, from_json);
    assert_eq!(
        from_json.build().unwrap().color(ColorToken::Primary),
        Color::from_hex(0xFF5500)
    );
}

#[test]
fn config_errors_are_reported() {
    let bad_color = SemanticColorScheme::from_toml("[colors]\nprimary = \"purple\"\n");
    assert!(matches!(
        bad_color,
        Err(ThemeError::InvalidColor { ref field, .. }) if field == "primary"
    ));

    let bad_token = SemanticColorScheme::from_toml("[colors]\ntertiary = \"#000000\"\n");
    assert!(matches!(bad_token, Err(ThemeError::UnknownToken(ref t)) if t == "tertiary"));

    let bad_base = SemanticColorScheme::from_toml("base = \"material_2030\"\n");
    assert!(matches!(bad_base, Err(ThemeError::Parse(_))));
}
