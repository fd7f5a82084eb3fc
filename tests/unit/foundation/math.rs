use std::hash::Hasher as _;

use super::*;

#[test]
fn fnv_default_matches_known_vector() {
    let mut h = Fnv1a64::default();
    h.write(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn hash_xy_is_stable_and_position_sensitive() {
    assert_eq!(hash_xy(7, 1, 3, 4), hash_xy(7, 1, 3, 4));
    assert_ne!(hash_xy(7, 1, 3, 4), hash_xy(7, 1, 4, 3));
    assert_ne!(hash_xy(7, 1, 3, 4), hash_xy(8, 1, 3, 4));
    assert_ne!(hash_xy(7, 1, 3, 4), hash_xy(7, 2, 3, 4));
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
    assert_eq!(mul_div255_u8(100, 128), 50);
}

#[test]
fn lerp_truncates() {
    assert_eq!(lerp_u8_trunc(0, 255, 0.0), 0);
    assert_eq!(lerp_u8_trunc(0, 255, 1.0), 255);
    assert_eq!(lerp_u8_trunc(0, 10, 0.55), 5);
}
