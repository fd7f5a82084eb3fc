use super::*;

fn small() -> FrameSize {
    FrameSize::new(120, 200).unwrap()
}

#[test]
fn sky_gradient_hits_end_stops() {
    let palette = SkyPalette::default();
    let sky = sky_gradient(small(), &palette).unwrap();
    assert_eq!(sky.pixel(0, 0), palette.top);
    assert_eq!(sky.pixel(119, 199), palette.bottom);
    // Rows are solid spans.
    assert_eq!(sky.pixel(3, 77), sky.pixel(100, 77));
}

#[test]
fn flat_gradient_is_solid_when_ends_match() {
    let c = Rgba8::rgb(44, 62, 80);
    let s = vertical_gradient(small(), c, c).unwrap();
    assert_eq!(s.pixel(60, 0), c);
    assert_eq!(s.pixel(60, 199), c);
}

#[test]
fn clouds_vanish_below_the_upper_band() {
    let clouds = cloud_layer(small(), 11).unwrap();
    for y in 130..200 {
        assert_eq!(clouds.pixel(60, y).a, 0, "row {y}");
    }
    assert!((0..40).any(|y| clouds.pixel(60, y).a > 0));
}

#[test]
fn ridge_outline_is_seeded_per_ridge() {
    let a = ridge_outline(small(), &RidgeSpec::FAR, 11, 0);
    assert_eq!(a.len(), 20);
    assert_eq!(a, ridge_outline(small(), &RidgeSpec::FAR, 11, 0));
    assert_ne!(a, ridge_outline(small(), &RidgeSpec::FAR, 11, 1));
    assert_ne!(a, ridge_outline(small(), &RidgeSpec::FAR, 12, 0));
    assert_eq!(a[18], Point::new(120.0, 200.0));
    assert_eq!(a[19], Point::new(0.0, 200.0));
    for p in &a[..18] {
        assert!(p.y > 200.0 * 0.3 && p.y < 200.0 * 0.7, "{p:?}");
    }
}

#[test]
fn ridge_layer_covers_the_bottom_not_the_sky() {
    let ridge = ridge_layer(small(), &RidgeSpec::NEAR, 11, 1).unwrap();
    assert_eq!(ridge.pixel(60, 5).a, 0);
    assert!(ridge.pixel(60, 195).a > 200);
}

#[test]
fn haze_sits_near_the_horizon() {
    let size = FrameSize::new(60, 400).unwrap();
    let haze = haze_layer(size).unwrap();
    assert_eq!(haze.pixel(30, 0).a, 0);
    assert!(haze.pixel(30, 190).a > 0);
}

#[test]
fn grain_alpha_is_bounded() {
    let g = grain_layer(small(), 3).unwrap();
    for y in (0..200).step_by(7) {
        for x in (0..120).step_by(5) {
            let p = g.pixel(x, y);
            assert!(p.a <= 28);
        }
    }
}

#[test]
fn vignette_darkens_edges_more_than_center() {
    // Square enough that the innermost ring stays well clear of the center.
    let size = FrameSize::new(1000, 1000).unwrap();
    let v = vignette_layer(size).unwrap();
    let center = v.pixel(500, 500);
    assert_eq!(center.r, 0);
    assert!(v.pixel(2, 500).a > center.a);
    assert!(v.pixel(500, 997).a > center.a);
}

#[test]
fn sun_glow_stays_within_its_radius() {
    let size = FrameSize::new(400, 400).unwrap();
    let sun = sun_glow_layer(size).unwrap();
    assert!(sun.pixel(88 + 250, 88).a > sun.pixel(399, 399).a);
}

#[test]
fn sun_glow_discs_replace_instead_of_stacking() {
    let size = FrameSize::new(400, 400).unwrap();
    let sun = sun_glow_layer(size).unwrap();
    let peak = (0..400)
        .flat_map(|y| (0..400).map(move |x| (x, y)))
        .map(|(x, y)| sun.pixel(x, y).a)
        .max()
        .unwrap();
    assert!(peak > 0);
    assert!(peak <= 120, "peak alpha {peak}");
}

fn row_alpha(s: &Surface, y: u32) -> f64 {
    let sum: u32 = (0..s.width()).map(|x| u32::from(s.pixel(x, y).a)).sum();
    f64::from(sum) / f64::from(s.width())
}

#[test]
fn cloud_alpha_fades_toward_the_band_bottom() {
    let size = FrameSize::new(600, 400).unwrap();
    let clouds = cloud_layer(size, 11).unwrap();
    // Band ends at 0.55 of the height; average each quarter of it.
    let band = 220u32;
    let quarters: Vec<f64> = (0..4)
        .map(|q| {
            let rows = q * band / 4..(q + 1) * band / 4;
            let n = rows.len() as f64;
            rows.map(|y| row_alpha(&clouds, y)).sum::<f64>() / n
        })
        .collect();
    for pair in quarters.windows(2) {
        assert!(pair[0] > pair[1], "{quarters:?}");
    }
}

#[test]
fn seeded_steps_repeat_byte_for_byte() {
    let size = small();
    assert_eq!(cloud_layer(size, 11).unwrap(), cloud_layer(size, 11).unwrap());
    assert_ne!(cloud_layer(size, 11).unwrap(), cloud_layer(size, 12).unwrap());
    assert_eq!(grain_layer(size, 5).unwrap(), grain_layer(size, 5).unwrap());
    assert_ne!(grain_layer(size, 5).unwrap(), grain_layer(size, 6).unwrap());
    assert_eq!(
        ridge_layer(size, &RidgeSpec::FAR, 11, 0).unwrap(),
        ridge_layer(size, &RidgeSpec::FAR, 11, 0).unwrap()
    );
}
