use super::*;

#[test]
fn filled_surface_reads_back_straight_color() {
    let s = Surface::filled(3, 2, Rgba8::rgb(12, 34, 56)).unwrap();
    assert_eq!(s.pixel(2, 1), Rgba8::rgb(12, 34, 56));
    assert_eq!(s.pixel(3, 0), Rgba8::TRANSPARENT);
}

#[test]
fn zero_sized_surfaces_are_rejected() {
    assert!(Surface::new(0, 4).is_err());
    assert!(Surface::filled(4, 0, Rgba8::WHITE).is_err());
}

#[test]
fn composite_requires_matching_sizes() {
    let mut a = Surface::new(4, 4).unwrap();
    let b = Surface::new(4, 5).unwrap();
    assert!(a.composite(&b).is_err());
}

#[test]
fn composite_transparent_layer_is_noop() {
    let mut base = Surface::filled(4, 4, Rgba8::rgb(1, 2, 3)).unwrap();
    let before = base.clone();
    base.composite(&Surface::new(4, 4).unwrap()).unwrap();
    assert_eq!(base, before);
}

#[test]
fn crop_then_paste_restores_region() {
    let src = Surface::from_fn(8, 6, |x, y| Rgba8::rgb(x as u8 * 20, y as u8 * 30, 7)).unwrap();
    let region = src.crop(Rect::new(2.0, 1.0, 6.0, 4.0)).unwrap();
    assert_eq!((region.width(), region.height()), (4, 3));
    assert_eq!(region.pixel(0, 0), src.pixel(2, 1));

    let mut dst = Surface::new(8, 6).unwrap();
    dst.paste(&region, 2, 1);
    assert_eq!(dst.pixel(5, 3), src.pixel(5, 3));
    assert_eq!(dst.pixel(1, 1), Rgba8::TRANSPARENT);
    assert_eq!(dst.pixel(6, 3), Rgba8::TRANSPARENT);
}

#[test]
fn paste_clips_at_edges() {
    let patch = Surface::filled(4, 4, Rgba8::WHITE).unwrap();
    let mut dst = Surface::new(5, 5).unwrap();
    dst.paste(&patch, -2, 3);
    assert_eq!(dst.pixel(0, 3), Rgba8::WHITE);
    assert_eq!(dst.pixel(1, 4), Rgba8::WHITE);
    assert_eq!(dst.pixel(2, 4), Rgba8::TRANSPARENT);
}

#[test]
fn crop_outside_surface_is_an_error() {
    let s = Surface::new(4, 4).unwrap();
    assert!(s.crop(Rect::new(10.0, 10.0, 12.0, 12.0)).is_err());
}

#[test]
fn clip_to_clears_outside_only() {
    let mut s = Surface::filled(6, 6, Rgba8::WHITE).unwrap();
    s.clip_to(Rect::new(1.0, 2.0, 4.0, 5.0));
    assert_eq!(s.pixel(1, 2), Rgba8::WHITE);
    assert_eq!(s.pixel(3, 4), Rgba8::WHITE);
    assert_eq!(s.pixel(0, 2), Rgba8::TRANSPARENT);
    assert_eq!(s.pixel(4, 4), Rgba8::TRANSPARENT);
    assert_eq!(s.pixel(2, 5), Rgba8::TRANSPARENT);
}

#[test]
fn flatten_of_opaque_surface_round_trips() {
    let s = Surface::from_fn(5, 3, |x, y| Rgba8::rgb(x as u8 * 50, 255 - y as u8, 99)).unwrap();
    let rgb = s.flatten();
    let back = Surface::from_rgb_image(&rgb).unwrap();
    assert_eq!(back, s);
}

#[test]
fn blur_keeps_dimensions() {
    let s = Surface::filled(7, 9, Rgba8::rgba(10, 10, 10, 128)).unwrap();
    let b = s.blur(3.0).unwrap();
    assert_eq!(b.size(), s.size());
    assert_eq!(b, s);
}
