//! Procedural photographic backdrops.
//!
//! [`photo_backdrop`] stacks seven layers in a fixed order: sky gradient, clouds, far and near
//! ridges, horizon haze, sun glow, film grain and vignette. Every layer is a pure function of
//! the frame size and the seed, so the same inputs always produce the same bytes.

/// Seeded single-channel noise.
pub mod noise;
/// The individual layers.
pub mod steps;

use tracing::debug;

use crate::foundation::core::FrameSize;
use crate::foundation::error::MockupResult;
use crate::raster::surface::Surface;
use crate::theme::{SkyPalette, Theme};

pub use noise::NoiseField;
pub use steps::{
    RidgeSpec, cloud_layer, grain_layer, haze_layer, ridge_layer, ridge_outline, sky_gradient,
    sun_glow_layer, vertical_gradient, vignette_layer,
};

/// Synthetic landscape photo: sky, clouds, two textured ridges, haze, sun, grain and vignette.
#[tracing::instrument(level = "debug", skip(palette))]
pub fn photo_backdrop(size: FrameSize, seed: u64, palette: &SkyPalette) -> MockupResult<Surface> {
    let mut canvas = sky_gradient(size, palette)?;

    canvas.composite(&cloud_layer(size, seed)?)?;
    debug!("clouds composited");

    for (index, spec) in [RidgeSpec::FAR, RidgeSpec::NEAR].iter().enumerate() {
        canvas.composite(&ridge_layer(size, spec, seed, index as u32)?)?;
        debug!(index, y_base = spec.y_base, "ridge composited");
    }

    canvas.composite(&haze_layer(size)?)?;
    canvas.composite(&sun_glow_layer(size)?)?;
    canvas.composite(&grain_layer(size, seed)?)?;
    canvas.composite(&vignette_layer(size)?)?;
    debug!("atmosphere composited");

    Ok(canvas)
}

/// Non-photographic backdrop: the theme's background gradient.
pub fn flat_backdrop(size: FrameSize, theme: &Theme) -> MockupResult<Surface> {
    vertical_gradient(size, theme.background_top, theme.background_bottom)
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/mod.rs"]
mod tests;
