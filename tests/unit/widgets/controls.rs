use super::*;
use crate::foundation::core::Rgba8;
use crate::text::FontSet;
use crate::theme::Theme;

fn setup() -> (Theme, FontSet, Surface) {
    (
        Theme::glass(),
        FontSet::builtin(),
        Surface::filled(600, 400, Rgba8::rgb(20, 30, 40)).unwrap(),
    )
}

#[test]
fn pill_is_at_least_text_plus_padding() {
    let (theme, fonts, mut canvas) = setup();
    let mut ui = Ui::new(&theme, &fonts);
    for label in ["Privado", "Sin drama", "x", ""] {
        let text_w = ui.measure(label, FontRole::BodySmall).unwrap().width;
        let w = ui.pill(&mut canvas, Point::new(10.0, 10.0), label).unwrap();
        assert!(w >= f64::from(text_w) + 2.0 * PILL_PAD_X, "{label}");
    }
}

#[test]
fn chip_row_advances_by_width_and_gap() {
    let (theme, fonts, mut canvas) = setup();
    let mut ui = Ui::new(&theme, &fonts);
    let end = ui
        .chip_row(&mut canvas, Point::new(56.0, 100.0), &["Mapa", "Caja"])
        .unwrap();
    let pills: Vec<_> = ui.trace().of_kind(ElementKind::Pill).cloned().collect();
    assert_eq!(pills.len(), 2);
    assert_eq!(pills[1].rect.x0, pills[0].rect.x1 + CHIP_GAP);
    assert_eq!(end, pills[1].rect.x1 + CHIP_GAP);
}

#[test]
fn primary_button_fills_with_accent() {
    let (theme, fonts, mut canvas) = setup();
    let mut ui = Ui::new(&theme, &fonts);
    let rect = Rect::new(56.0, 200.0, 544.0, 280.0);
    ui.button(&mut canvas, rect, "ENTRAR", ButtonStyle::Primary).unwrap();
    assert_eq!(canvas.pixel(70, 240), theme.accent);
    assert_eq!(ui.trace().count(ElementKind::PrimaryButton), 1);
}

#[test]
fn ghost_button_keeps_its_interior() {
    let (theme, fonts, mut canvas) = setup();
    let before = canvas.pixel(70, 240);
    let mut ui = Ui::new(&theme, &fonts);
    ui.button(
        &mut canvas,
        Rect::new(56.0, 200.0, 544.0, 280.0),
        "ENTRAR SIN CUENTA",
        ButtonStyle::Ghost,
    )
    .unwrap();
    assert_eq!(canvas.pixel(70, 240), before);
    assert_eq!(ui.trace().count(ElementKind::GhostButton), 1);
}

#[test]
fn sparkline_stays_inside_its_box() {
    let (theme, fonts, mut canvas) = setup();
    let base = canvas.clone();
    let mut ui = Ui::new(&theme, &fonts);
    let rect = Rect::new(100.0, 100.0, 400.0, 160.0);
    ui.sparkline(&mut canvas, rect).unwrap();
    for x in 0..600 {
        assert_eq!(canvas.pixel(x, 20), base.pixel(x, 20));
        assert_eq!(canvas.pixel(x, 300), base.pixel(x, 300));
    }
    assert_ne!(canvas, base);
}
