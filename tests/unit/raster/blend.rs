use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_white_on_black_is_mid_gray() {
    let out = over([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn over_rows_only_touches_requested_rows() {
    let width = 2u32;
    let mut dst = vec![0u8; 2 * 3 * 4];
    let src = vec![255u8; 2 * 3 * 4];
    over_rows_in_place(&mut dst, &src, width, 1..2).unwrap();
    assert!(dst[..8].iter().all(|&v| v == 0));
    assert!(dst[8..16].iter().all(|&v| v == 255));
    assert!(dst[16..].iter().all(|&v| v == 0));
}

#[test]
fn mismatched_buffers_are_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(over_rows_in_place(&mut dst, &[0u8; 4], 1, 0..2).is_err());
    assert!(blend_atop_in_place(&mut dst, &[0u8; 12], BlendMode::Overlay).is_err());
}

#[test]
fn overlay_white_doubles_dark_backdrop() {
    // Opaque dark backdrop, opaque white source: overlay gives 2 * d.
    let mut dst = vec![40, 60, 80, 255];
    blend_over_in_place(&mut dst, &[255, 255, 255, 255], BlendMode::Overlay).unwrap();
    assert_eq!(dst, vec![80, 120, 160, 255]);
}

#[test]
fn atop_keeps_destination_alpha_and_skips_clear_pixels() {
    let mut dst = vec![0, 0, 0, 0, 30, 54, 78, 175];
    let src = vec![55, 55, 55, 55, 55, 55, 55, 55];
    blend_atop_in_place(&mut dst, &src, BlendMode::Overlay).unwrap();
    assert_eq!(&dst[..4], &[0, 0, 0, 0]);
    assert_eq!(dst[7], 175);
    // Overlay with white brightens the ridge color.
    assert!(dst[4] > 30 && dst[5] > 54 && dst[6] > 78);
}
