use image::GrayImage;

use crate::foundation::error::{MockupError, MockupResult};
use crate::foundation::math::hash_xy;
use crate::raster::blur::blur_channels;

/// Single-channel noise image with point-wise enhancement operators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseField(GrayImage);

impl NoiseField {
    /// Gaussian-like noise centered on 128 with standard deviation `sigma`.
    ///
    /// Every pixel is an Irwin-Hall sum of four uniforms taken from a position hash, so the
    /// field depends only on `(width, height, sigma, seed, salt)`.
    pub fn gaussian(width: u32, height: u32, sigma: f32, seed: u64, salt: u64) -> Self {
        // Var of a sum of four U(0,1) is 1/3.
        let norm = 3f64.sqrt();
        let sigma = f64::from(sigma);
        let img = GrayImage::from_fn(width, height, |x, y| {
            let h = hash_xy(seed, salt, x, y);
            let sum: f64 = (0..4)
                .map(|k| f64::from(((h >> (16 * k)) & 0xFFFF) as u16) / 65535.0)
                .sum();
            let z = (sum - 2.0) * norm;
            let v = (128.0 + sigma * z).round().clamp(0.0, 255.0) as u8;
            image::Luma([v])
        });
        Self(img)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn value(&self, x: u32, y: u32) -> u8 {
        self.0.get_pixel(x, y).0[0]
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.0
    }

    pub fn blurred(self, sigma: f32) -> MockupResult<Self> {
        let (w, h) = self.0.dimensions();
        let data = blur_channels(self.0.as_raw(), w, h, 1, sigma)?;
        GrayImage::from_raw(w, h, data)
            .map(Self)
            .ok_or_else(|| MockupError::render("blurred noise has the wrong length"))
    }

    /// Scale deviation from the rounded mean by `factor`.
    pub fn contrast(mut self, factor: f32) -> Self {
        let n = self.0.as_raw().len().max(1) as f64;
        let sum: u64 = self.0.as_raw().iter().map(|&v| u64::from(v)).sum();
        let mean = (sum as f64 / n + 0.5).floor();
        let f = f64::from(factor);
        for v in self.0.iter_mut() {
            *v = (mean + f * (f64::from(*v) - mean)).round().clamp(0.0, 255.0) as u8;
        }
        self
    }

    /// Scale every value by `factor`.
    pub fn brightness(mut self, factor: f32) -> Self {
        let f = f64::from(factor);
        for v in self.0.iter_mut() {
            *v = (f64::from(*v) * f).round().clamp(0.0, 255.0) as u8;
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/noise.rs"]
mod tests;
