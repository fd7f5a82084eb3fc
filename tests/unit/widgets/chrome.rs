use super::*;
use crate::text::FontSet;
use crate::theme::Theme;

#[test]
fn slot_centers_are_evenly_spaced() {
    let c = nav_slot_centers(780.0);
    assert_eq!(c, [97.0, 243.0, 390.0, 536.0, 682.0]);
}

#[test]
fn nav_bar_marks_only_the_active_slot() {
    let theme = Theme::glass();
    let fonts = FontSet::builtin();
    let mut canvas = Surface::filled(780, 400, Rgba8::BLACK).unwrap();
    let mut ui = Ui::new(&theme, &fonts);
    ui.nav_bar(&mut canvas, NavSlot::Lock).unwrap();

    let cy = 400.0 - NAV_HEIGHT - 24.0 + 52.0;
    let dot_y = (cy + 59.0) as u32;
    let centers = nav_slot_centers(780.0);
    for (slot, cx) in NavSlot::ALL.into_iter().zip(centers) {
        let px = canvas.pixel(cx as u32, dot_y);
        if slot == NavSlot::Lock {
            assert_eq!(px, theme.accent);
        } else {
            assert_ne!(px, theme.accent);
        }
    }
    let placed = ui.trace().of_kind(ElementKind::NavBar).next().unwrap();
    assert_eq!(placed.label.as_deref(), Some("lock"));
    assert_eq!(placed.rect, Rect::new(24.0, 252.0, 756.0, 376.0));
}

#[test]
fn status_bar_touches_only_the_top_strip() {
    let theme = Theme::glass();
    let fonts = FontSet::builtin();
    let mut canvas = Surface::filled(780, 300, Rgba8::BLACK).unwrap();
    let base = canvas.clone();
    let mut ui = Ui::new(&theme, &fonts);
    ui.status_bar(&mut canvas).unwrap();
    assert_ne!(canvas, base);
    for x in 0..780 {
        assert_eq!(canvas.pixel(x, 120), Rgba8::BLACK);
    }
}
