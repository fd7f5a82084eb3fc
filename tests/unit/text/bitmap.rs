use super::*;

#[test]
fn metrics_pick_font_and_integer_scale() {
    assert_eq!(BitmapMetrics::for_size(20.0).scale, 1);
    assert_eq!(BitmapMetrics::for_size(62.0).scale, 3);
    assert_eq!(BitmapMetrics::for_size(10.0).scale, 1);
    assert_eq!(BitmapMetrics::for_size(4.0).scale, 1);
    assert_eq!(BitmapMetrics::for_size(62.0).line_height(), 60);
}

#[test]
fn width_is_monospaced_and_scaled() {
    let m = BitmapMetrics::for_size(20.0);
    assert_eq!(m.width("ab"), 20);
    assert_eq!(m.width("abcd"), 2 * m.width("ab"));
    assert_eq!(BitmapMetrics::for_size(40.0).width("ab"), 40);
    assert_eq!(m.width(""), 0);
}

#[test]
fn curly_quotes_fold_to_ascii() {
    assert_eq!(fold_to_latin1("\u{201C}hola\u{201D}"), "\"hola\"");
    assert_eq!(fold_to_latin1("opt\u{2011}in"), "opt-in");
    assert!(matches!(fold_to_latin1("Bóveda"), Cow::Borrowed(_)));
}

#[test]
fn rasterized_glyphs_stay_inside_line_box() {
    let m = BitmapMetrics::for_size(40.0);
    let (rects, w, h) = rasterize("INFORMACIÓN", m);
    assert!(!rects.is_empty());
    assert_eq!(w, m.width("INFORMACIÓN"));
    assert_eq!(h, 40);
    for r in &rects {
        assert!(r.x0 >= 0.0 && r.y0 >= 0.0);
        assert!(r.x1 <= f64::from(w) && r.y1 <= f64::from(h));
        assert_eq!(r.height(), 2.0);
    }
}

#[test]
fn blank_text_lights_nothing() {
    let (rects, w, _) = rasterize("   ", BitmapMetrics::for_size(20.0));
    assert!(rects.is_empty());
    assert_eq!(w, 30);
}
