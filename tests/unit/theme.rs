use super::*;

#[test]
fn presets_resolve_by_name() {
    for name in ["glass", "light", "dark"] {
        assert_eq!(Theme::preset(name).unwrap().name, name);
    }
    assert!(Theme::preset("neon").is_none());
}

#[test]
fn hex_literals_decode() {
    assert_eq!(Theme::glass().accent, Rgba8::rgb(0x7D, 0x5C, 0x6B));
    assert_eq!(Theme::dark().accent_alt, Rgba8::rgb(0xF1, 0xC4, 0x0F));
}

#[test]
fn json_round_trip_preserves_every_role() {
    let theme = Theme::light();
    let json = serde_json::to_string(&theme).unwrap();
    let back = Theme::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn json_without_sky_uses_default_palette() {
    let mut value = serde_json::to_value(Theme::dark()).unwrap();
    value.as_object_mut().unwrap().remove("sky");
    let back: Theme = serde_json::from_value(value).unwrap();
    assert_eq!(back.sky, SkyPalette::default());
}

#[test]
fn blank_name_is_rejected() {
    let mut theme = Theme::glass();
    theme.name = "  ".into();
    let json = serde_json::to_string(&theme).unwrap();
    assert!(Theme::from_json_reader(json.as_bytes()).is_err());
}
