use super::*;

#[test]
fn paragraph_returns_y_below_last_line() {
    let theme = Theme::glass();
    let fonts = FontSet::builtin();
    let mut ui = Ui::new(&theme, &fonts);
    let mut canvas = Surface::filled(400, 300, Rgba8::BLACK).unwrap();
    // Built-in body face at 28px: 10px per char.
    let end = ui
        .paragraph(
            &mut canvas,
            10.0,
            20.0,
            "aaaa bbbb cccc",
            FontRole::Body,
            theme.text,
            95.0,
            38.0,
        )
        .unwrap();
    assert_eq!(end, 20.0 + 2.0 * 38.0);
    assert_eq!(ui.trace().count(ElementKind::Paragraph), 1);
}

#[test]
fn empty_paragraph_keeps_y() {
    let theme = Theme::glass();
    let fonts = FontSet::builtin();
    let mut ui = Ui::new(&theme, &fonts);
    let mut canvas = Surface::filled(100, 100, Rgba8::BLACK).unwrap();
    let before = canvas.clone();
    let end = ui
        .paragraph(&mut canvas, 0.0, 42.0, "", FontRole::Body, theme.text, 80.0, 30.0)
        .unwrap();
    assert_eq!(end, 42.0);
    assert_eq!(canvas, before);
}

#[test]
fn label_records_its_box_and_draws_pixels() {
    let theme = Theme::glass();
    let fonts = FontSet::builtin();
    let mut ui = Ui::new(&theme, &fonts);
    let mut canvas = Surface::filled(300, 120, Rgba8::BLACK).unwrap();
    let extent = ui
        .label(&mut canvas, Point::new(56.0, 30.0), "CONZIA", FontRole::Display, theme.text)
        .unwrap();
    let placed = ui.trace().find("CONZIA").unwrap();
    assert_eq!(placed.kind, ElementKind::Label);
    assert_eq!(placed.rect.origin(), Point::new(56.0, 30.0));
    assert_eq!(placed.rect.width(), f64::from(extent.width));

    let lit = (30..90)
        .flat_map(|y| (56..240).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y) != Rgba8::BLACK)
        .count();
    assert!(lit > 50);
}
