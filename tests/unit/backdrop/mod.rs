use super::*;

#[test]
fn photo_backdrop_is_opaque_and_deterministic() {
    let size = FrameSize::new(90, 160).unwrap();
    let palette = SkyPalette::default();
    let a = photo_backdrop(size, 11, &palette).unwrap();
    let b = photo_backdrop(size, 11, &palette).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert!(a.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn seed_changes_the_backdrop() {
    let size = FrameSize::new(90, 160).unwrap();
    let palette = SkyPalette::default();
    let a = photo_backdrop(size, 11, &palette).unwrap();
    let b = photo_backdrop(size, 12, &palette).unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn flat_backdrop_uses_theme_background() {
    let theme = Theme::dark();
    let s = flat_backdrop(FrameSize::new(10, 10).unwrap(), &theme).unwrap();
    assert_eq!(s.pixel(5, 5), theme.background_top);
}
