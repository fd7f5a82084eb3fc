use super::*;

fn mean(n: &NoiseField) -> f64 {
    let raw = n.as_image().as_raw();
    raw.iter().map(|&v| f64::from(v)).sum::<f64>() / raw.len() as f64
}

#[test]
fn same_inputs_give_identical_fields() {
    let a = NoiseField::gaussian(64, 48, 60.0, 11, 3);
    let b = NoiseField::gaussian(64, 48, 60.0, 11, 3);
    assert_eq!(a, b);
    assert_ne!(a, NoiseField::gaussian(64, 48, 60.0, 12, 3));
    assert_ne!(a, NoiseField::gaussian(64, 48, 60.0, 11, 4));
}

#[test]
fn noise_is_centered_with_requested_spread() {
    let n = NoiseField::gaussian(128, 128, 40.0, 7, 1);
    let m = mean(&n);
    assert!((m - 128.0).abs() < 3.0, "mean {m}");
    let raw = n.as_image().as_raw();
    let var = raw.iter().map(|&v| (f64::from(v) - m).powi(2)).sum::<f64>() / raw.len() as f64;
    let sd = var.sqrt();
    assert!((sd - 40.0).abs() < 4.0, "sd {sd}");
}

#[test]
fn zero_sigma_is_flat_gray() {
    let n = NoiseField::gaussian(8, 8, 0.0, 1, 1);
    assert!(n.as_image().as_raw().iter().all(|&v| v == 128));
}

#[test]
fn contrast_preserves_mean_and_widens_spread() {
    let n = NoiseField::gaussian(64, 64, 20.0, 3, 9);
    let before_m = mean(&n);
    let spread = |f: &NoiseField| {
        let raw = f.as_image().as_raw();
        i32::from(*raw.iter().max().unwrap()) - i32::from(*raw.iter().min().unwrap())
    };
    let before = spread(&n);
    let c = n.contrast(1.5);
    assert!((mean(&c) - before_m).abs() < 1.5);
    assert!(spread(&c) > before);
}

#[test]
fn brightness_scales_values() {
    let n = NoiseField::gaussian(4, 4, 0.0, 1, 1).brightness(1.15);
    assert!(n.as_image().as_raw().iter().all(|&v| v == 147));
    let dark = NoiseField::gaussian(4, 4, 0.0, 1, 1).brightness(0.0);
    assert!(dark.as_image().as_raw().iter().all(|&v| v == 0));
}

#[test]
fn blurring_smooths_noise() {
    let n = NoiseField::gaussian(64, 64, 60.0, 5, 2);
    let b = n.clone().blurred(6.0).unwrap();
    let rough = |f: &NoiseField| -> u64 {
        let mut acc = 0u64;
        for y in 0..f.height() {
            for x in 1..f.width() {
                acc += u64::from(f.value(x, y).abs_diff(f.value(x - 1, y)));
            }
        }
        acc
    };
    assert!(rough(&b) * 4 < rough(&n));
}
