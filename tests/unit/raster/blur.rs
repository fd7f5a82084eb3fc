use super::*;

#[test]
fn blur_sigma_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = blur_channels(&src, 1, 2, 4, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (6u32, 5u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    for sigma in [0.6f32, 1.6, 6.0, 24.0] {
        let out = blur_channels(&src, w, h, 4, sigma).unwrap();
        assert_eq!(out, src, "sigma {sigma}");
    }
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((2 * w + 2) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_channels(&src, w, h, 4, 0.8).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 6);
}

#[test]
fn wide_blur_keeps_premultiplied_invariant() {
    let (w, h) = (16u32, 16u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    for (i, px) in src.chunks_exact_mut(4).enumerate() {
        if i % 3 == 0 {
            px.copy_from_slice(&[90, 40, 200, 200]);
        }
    }
    let out = blur_channels(&src, w, h, 4, 5.0).unwrap();
    for px in out.chunks_exact(4) {
        assert!(px[0] <= px[3] && px[1] <= px[3] && px[2] <= px[3]);
    }
}

#[test]
fn single_channel_masks_blur_too() {
    let (w, h) = (9u32, 1u32);
    let mut src = vec![0u8; 9];
    src[4] = 255;
    let out = blur_channels(&src, w, h, 1, 3.0).unwrap();
    assert!(out[4] < 255);
    assert!(out[3] > 0 && out[5] > 0);
    assert_eq!(out[3], out[5]);
}

#[test]
fn mismatched_lengths_and_bad_sigma_are_rejected() {
    assert!(blur_channels(&[0u8; 7], 1, 2, 4, 1.0).is_err());
    assert!(blur_channels(&[0u8; 8], 1, 2, 4, f32::NAN).is_err());
    assert!(blur_channels(&[0u8; 8], 1, 2, 4, -1.0).is_err());
}

#[test]
fn box_sizes_are_odd() {
    for sigma in [2.0f32, 10.0, 18.0, 28.0] {
        let sizes = box_sizes_for_gauss(sigma, 3);
        assert_eq!(sizes.len(), 3);
        assert!(sizes.iter().all(|s| s % 2 == 1));
    }
}

#[test]
fn gaussian_taps_are_symmetric_and_sum_to_one() {
    for sigma in [0.1f32, 0.5, 1.0, 1.9] {
        let taps = Taps::gaussian(sigma);
        let w = &taps.weights;
        assert_eq!(w.len() % 2, 1, "sigma {sigma}");
        assert_eq!(w.iter().map(|&v| u64::from(v)).sum::<u64>(), Taps::ONE);
        assert!(w.iter().eq(w.iter().rev()), "sigma {sigma}");
        assert_eq!(w.iter().max(), w.get(w.len() / 2));
    }
}

#[test]
fn zero_channels_and_infinite_sigma_are_rejected() {
    assert!(blur_channels(&[], 1, 1, 0, 1.0).is_err());
    assert!(matches!(
        blur_channels(&[0u8; 4], 1, 1, 4, f32::INFINITY),
        Err(MockupError::Validation(_))
    ));
}
