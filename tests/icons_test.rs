use cropcast::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_metric_icons() {
    let icons = IconService::new(IconTheme::Ascii).icons();
    assert_eq!(icons.metrics.accuracy, "%");
    assert_eq!(icons.metrics.farmers, "&");
    assert_eq!(icons.metrics.data_points, "#");
    assert_eq!(icons.metrics.districts, "+");
}

#[test]
fn test_every_theme_has_page_icons() {
    for theme in [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji] {
        let icons = IconService::new(theme).icons();
        for glyph in [
            icons.pages.home,
            icons.pages.farmer_portal,
            icons.pages.regional_insights,
            icons.pages.forecast,
            icons.pages.methodology,
            icons.pages.contact,
            icons.pages.not_found,
        ] {
            assert!(!glyph.is_empty());
        }
    }
}

#[test]
fn test_theme_cycling() {
    let mut service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}
