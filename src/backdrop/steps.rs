use std::f64::consts::PI;

use rand::{Rng as _, SeedableRng as _};
use rand_chacha::ChaCha8Rng;

use crate::backdrop::noise::NoiseField;
use crate::foundation::core::{FrameSize, Point, Rect, Rgba8};
use crate::foundation::error::MockupResult;
use crate::foundation::math::lerp_u8_trunc;
use crate::raster::blend::BlendMode;
use crate::raster::surface::Surface;
use crate::theme::SkyPalette;

const SALT_CLOUDS: u64 = 0x01;
const SALT_GRAIN: u64 = 0x02;
const SALT_RIDGE: u64 = 0x10;

/// Fraction of the frame height covered by the upper sky band and the clouds.
const SKY_SPLIT: f64 = 0.55;

/// One mountain silhouette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgeSpec {
    /// Mean horizon height as a fraction of the frame height.
    pub y_base: f64,
    /// Amplitude of the main undulation, same units as `y_base`.
    pub amplitude: f64,
    pub color: Rgba8,
    pub blur_sigma: f32,
    /// Standard deviation of the texture noise.
    pub grain: f32,
}

impl RidgeSpec {
    pub const FAR: Self = Self {
        y_base: 0.48,
        amplitude: 0.06,
        color: Rgba8::rgba(30, 54, 78, 175),
        blur_sigma: 1.6,
        grain: 70.0,
    };

    pub const NEAR: Self = Self {
        y_base: 0.57,
        amplitude: 0.06,
        color: Rgba8::rgba(12, 26, 38, 230),
        blur_sigma: 0.8,
        grain: 85.0,
    };
}

fn row_fraction(y: u32, height: u32) -> f64 {
    f64::from(y) / f64::from(height.saturating_sub(1).max(1))
}

fn lerp_color(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    Rgba8::rgb(
        lerp_u8_trunc(a.r, b.r, t),
        lerp_u8_trunc(a.g, b.g, t),
        lerp_u8_trunc(a.b, b.b, t),
    )
}

/// Opaque three-stop vertical gradient: top to mid over the upper 55%, mid to bottom below.
pub fn sky_gradient(size: FrameSize, palette: &SkyPalette) -> MockupResult<Surface> {
    let rows: Vec<Rgba8> = (0..size.height)
        .map(|y| {
            let t = row_fraction(y, size.height);
            if t < SKY_SPLIT {
                lerp_color(palette.top, palette.mid, t / SKY_SPLIT)
            } else {
                lerp_color(palette.mid, palette.bottom, (t - SKY_SPLIT) / (1.0 - SKY_SPLIT))
            }
        })
        .collect();
    Surface::from_fn(size.width, size.height, |_, y| rows[y as usize])
}

/// Two-color vertical gradient; solid when both ends match.
pub fn vertical_gradient(size: FrameSize, top: Rgba8, bottom: Rgba8) -> MockupResult<Surface> {
    if top == bottom {
        return Surface::filled(size.width, size.height, top);
    }
    Surface::from_fn(size.width, size.height, |_, y| {
        lerp_color(top, bottom, row_fraction(y, size.height))
    })
}

/// White cloud wisps over the upper sky band, fading linearly to nothing at its lower edge.
pub fn cloud_layer(size: FrameSize, seed: u64) -> MockupResult<Surface> {
    let noise = NoiseField::gaussian(size.width, size.height, 90.0, seed, SALT_CLOUDS)
        .blurred(10.0)?
        .contrast(1.35)
        .brightness(1.15);
    let band = size.h() * SKY_SPLIT;
    let layer = Surface::from_fn(size.width, size.height, |x, y| {
        let fy = f64::from(y);
        if fy >= band {
            return Rgba8::TRANSPARENT;
        }
        let fade = 1.0 - fy / band;
        let a = (f64::from(noise.value(x, y)) / 255.0 * 110.0 * fade) as u8;
        Rgba8::rgba(255, 255, 255, a)
    })?;
    layer.blur(2.0)
}

/// Horizon polyline of a ridge, left to right, followed by the bottom-right and bottom-left
/// corners.
pub fn ridge_outline(size: FrameSize, spec: &RidgeSpec, seed: u64, index: u32) -> Vec<Point> {
    let stream = (u64::from(index) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ stream);
    let freq = 1.2 + rng.gen_range(0.0..1.0) * 0.4;
    let phase = rng.gen_range(0.0..1.0);

    let (w, h) = (size.w(), size.h());
    let mut pts: Vec<Point> = (0..18)
        .map(|i| {
            let t = f64::from(i) / 17.0;
            let y = spec.y_base
                + spec.amplitude * (t * PI * freq + phase).sin()
                + 0.03 * (t * PI * 5.1 + 0.7).sin();
            Point::new((w * t).trunc(), (h * y).trunc())
        })
        .collect();
    pts.push(Point::new(w, h));
    pts.push(Point::new(0.0, h));
    pts
}

/// A filled ridge with an overlay-blended noise texture, softened by `spec.blur_sigma`.
pub fn ridge_layer(
    size: FrameSize,
    spec: &RidgeSpec,
    seed: u64,
    index: u32,
) -> MockupResult<Surface> {
    let outline = ridge_outline(size, spec, seed, index);
    let mut ridge = Surface::layer(size.width, size.height, |pen| {
        pen.polygon(&outline, Some(spec.color), None, 0.0);
        Ok(())
    })?;

    let tex = NoiseField::gaussian(
        size.width,
        size.height,
        spec.grain,
        seed,
        SALT_RIDGE + u64::from(index),
    )
    .blurred(6.0)?
    .contrast(1.5);
    let tex = Surface::from_fn(size.width, size.height, |x, y| {
        let a = (f64::from(tex.value(x, y)) / 255.0 * 55.0) as u8;
        Rgba8::rgba(255, 255, 255, a)
    })?;
    ridge.composite_atop(&tex, BlendMode::Overlay)?;
    ridge.blur(spec.blur_sigma)
}

/// Ten overlapping white bands just above the horizon, each replacing the one before.
pub fn haze_layer(size: FrameSize) -> MockupResult<Surface> {
    let h = size.h();
    let band_h = (h * 0.08).trunc();
    let bands: Vec<(f64, f64, u8)> = (0..10)
        .map(|i| {
            let a = (28.0 * (1.0 - f64::from(i) / 9.0)) as u8;
            let y1 = (h * (0.44 + f64::from(i) * 0.02)).trunc();
            (y1, y1 + band_h, a)
        })
        .collect();
    let layer = Surface::from_fn(size.width, size.height, |_, y| {
        let fy = f64::from(y);
        let a = bands
            .iter()
            .rev()
            .find(|(y0, y1, _)| fy >= *y0 && fy <= *y1)
            .map_or(0, |b| b.2);
        Rgba8::rgba(255, 255, 255, a)
    })?;
    layer.blur(18.0)
}

/// Concentric white discs with squared alpha falloff around an upper-left sun, heavily blurred.
///
/// Each disc replaces what lies under it, so a pixel takes the alpha of the smallest disc that
/// covers it and never exceeds the outer disc's 120.
pub fn sun_glow_layer(size: FrameSize) -> MockupResult<Surface> {
    const RADIUS: f64 = 320.0;
    let cx = (size.w() * 0.22).trunc();
    let cy = (size.h() * 0.22).trunc();
    let discs: Vec<(f64, u8)> = (0..12)
        .map(|i| {
            let t = f64::from(i) / 11.0;
            let r = (RADIUS * (1.0 - t)).trunc();
            (r, (120.0 * (1.0 - t).powi(2)) as u8)
        })
        .filter(|&(r, a)| r > 0.0 && a > 0)
        .collect();
    let layer = Surface::from_fn(size.width, size.height, |x, y| {
        let d = (f64::from(x) + 0.5 - cx).hypot(f64::from(y) + 0.5 - cy);
        let a = discs
            .iter()
            .rev()
            .find(|(r, _)| d <= *r)
            .map_or(0, |disc| disc.1);
        Rgba8::rgba(255, 255, 255, a)
    })?;
    layer.blur(28.0)
}

/// Fine uniform grain as a faint white overlay.
pub fn grain_layer(size: FrameSize, seed: u64) -> MockupResult<Surface> {
    let noise = NoiseField::gaussian(size.width, size.height, 60.0, seed, SALT_GRAIN)
        .blurred(0.6)?
        .contrast(1.8);
    Surface::from_fn(size.width, size.height, |x, y| {
        let a = (f64::from(noise.value(x, y)) / 255.0 * 28.0) as u8;
        Rgba8::rgba(255, 255, 255, a)
    })
}

/// Nested rounded-rect rings whose alpha grows with inset depth, blurred into one soft black
/// layer.
pub fn vignette_layer(size: FrameSize) -> MockupResult<Surface> {
    let (w, h) = (size.w(), size.h());
    let layer = Surface::layer(size.width, size.height, |pen| {
        for i in 0..18u8 {
            let inset = f64::from(i) * 20.0;
            if inset * 2.0 >= w || inset * 2.0 >= h {
                break;
            }
            let a = 10 + i * 7;
            pen.rounded_rect(
                Rect::new(inset, inset, w - inset, h - inset),
                120.0,
                None,
                Some(Rgba8::BLACK.with_alpha(a)),
                6.0,
            );
        }
        Ok(())
    })?;
    layer.blur(24.0)
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/steps.rs"]
mod tests;
